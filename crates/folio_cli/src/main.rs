//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::{ContentService, MemoryKeyValueStore};

fn main() {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    if let Err(err) = smoke_roundtrip() {
        eprintln!("smoke roundtrip failed: {err}");
        std::process::exit(1);
    }
}

// Exercises the default render plus one add-project/save/load cycle against
// an in-memory store, without touching any on-disk state.
fn smoke_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let mut service = ContentService::new(MemoryKeyValueStore::new())?;
    println!("brand={}", service.page().brand);
    println!("default_projects={}", service.page().project_cards.len());

    service.add_project("Smoke Project", "Added by the CLI probe.", "rust")?;
    let confirmation = service.save()?;
    println!("save={confirmation}");
    println!("projects_after_save={}", service.page().project_cards.len());
    Ok(())
}

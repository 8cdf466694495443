//! `restmap-inspect`: print the allowed-method table for a catalog document.
//!
//! Usage: `restmap-inspect <catalog.json>` or `RESTMAP_CATALOG=<path> restmap-inspect`.

use restmap_api::{CATALOG_ENV, load_catalog, resolve_catalog_path};

fn main() -> anyhow::Result<()> {
    restmap_observability::init();

    let path = resolve_catalog_path(std::env::args().nth(1), std::env::var(CATALOG_ENV).ok())?;

    let catalog = load_catalog(&path)?;
    if catalog.is_empty() {
        tracing::warn!(path = %path.display(), "catalog defines no resources");
    }

    let table = serde_json::to_string_pretty(&catalog.allowed_methods())?;
    println!("{table}");

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::Context;

use restmap_mapping::RepositoryCatalog;

/// Environment variable naming the catalog document.
pub const CATALOG_ENV: &str = "RESTMAP_CATALOG";

/// Catalog path from the command-line argument, else from [`CATALOG_ENV`].
pub fn resolve_catalog_path(
    arg: Option<String>,
    env_value: Option<String>,
) -> anyhow::Result<PathBuf> {
    arg.or(env_value)
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .with_context(|| format!("usage: restmap-inspect <catalog.json> (or set {CATALOG_ENV})"))
}

/// Read and parse a JSON catalog document from disk.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<RepositoryCatalog> {
    let path = path.as_ref();
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;

    let catalog = RepositoryCatalog::from_json(&document)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    tracing::info!(path = %path.display(), resources = catalog.len(), "loaded repository catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use restmap_core::{HttpMethod, ResourceType};

    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("restmap-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn argument_wins_over_environment() {
        let path = resolve_catalog_path(
            Some("cli.json".to_string()),
            Some("env.json".to_string()),
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("cli.json"));
    }

    #[test]
    fn environment_is_the_fallback() {
        let path = resolve_catalog_path(None, Some("env.json".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("env.json"));
    }

    #[test]
    fn missing_path_reports_usage() {
        let err = resolve_catalog_path(None, None).unwrap_err();
        assert!(err.to_string().contains(CATALOG_ENV));

        assert!(resolve_catalog_path(Some("  ".to_string()), None).is_err());
    }

    #[test]
    fn loads_catalog_from_disk() {
        let path = write_temp(
            "catalog.json",
            r#"{ "people": { "find_all": { "name": "findAll" } } }"#,
        );

        let catalog = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            catalog.supports("people", HttpMethod::Get, ResourceType::Collection),
            Ok(true)
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_catalog("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_document_is_reported() {
        let path = write_temp("broken.json", "{ not json");

        let err = load_catalog(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().starts_with("failed to parse catalog"));
    }
}

//! Config loading.

use std::path::Path;

use anyhow::{Context, Result};
use dekita_spec::AssetConfig;

/// Load the config at `path`, or the built-in defaults when `path` is `None`.
pub fn load_config(path: Option<&str>) -> Result<AssetConfig> {
    let Some(path) = path else {
        log::debug!("no config file given, using defaults");
        return Ok(AssetConfig::default());
    };
    let config = AssetConfig::from_file(Path::new(path))
        .with_context(|| format!("Failed to load config file: {}", path))?;
    log::info!("loaded config {}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_is_default() {
        assert_eq!(load_config(None).unwrap(), AssetConfig::default());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_config(Some("/no/such/config.json")).unwrap_err();
        assert!(err.to_string().contains("/no/such/config.json"));
    }

    #[test]
    fn test_loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "icon": {{ "margin": 64 }} }}"#).unwrap();
        let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.icon.margin, 64);
    }
}

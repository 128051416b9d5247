use crate::error::{PageKitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "pagekit.json";
const DEFAULT_APP: &str = "app";
const DEFAULT_TEMPLATE_EXT: &str = ".html";
const DEFAULT_HANDLERS_FILE: &str = "src/handlers.rs";
const DEFAULT_ROUTES_FILE: &str = "src/routes.rs";
const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Configuration for pagekit, stored in `pagekit.json` at the site root.
/// Every field has a default so a missing or partial file still works.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Application name; templates live under `<templates_dir>/<app>/`.
    #[serde(default = "default_app")]
    pub app: String,

    /// Extension for template files (e.g. ".html")
    #[serde(default = "default_template_ext")]
    pub template_ext: String,

    /// Handler registry file, relative to the site root
    #[serde(default = "default_handlers_file")]
    pub handlers_file: String,

    /// Route registry file, relative to the site root
    #[serde(default = "default_routes_file")]
    pub routes_file: String,

    /// Templates root, relative to the site root
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

fn default_app() -> String {
    DEFAULT_APP.to_string()
}

fn default_template_ext() -> String {
    DEFAULT_TEMPLATE_EXT.to_string()
}

fn default_handlers_file() -> String {
    DEFAULT_HANDLERS_FILE.to_string()
}

fn default_routes_file() -> String {
    DEFAULT_ROUTES_FILE.to_string()
}

fn default_templates_dir() -> String {
    DEFAULT_TEMPLATES_DIR.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app: default_app(),
            template_ext: default_template_ext(),
            handlers_file: default_handlers_file(),
            routes_file: default_routes_file(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl SiteConfig {
    /// Load config from the site root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PageKitError::Io)?;
        let config: SiteConfig =
            serde_json::from_str(&content).map_err(PageKitError::Serialization)?;
        Ok(config)
    }

    /// Save config to the site root
    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();
        if !root.exists() {
            fs::create_dir_all(root).map_err(PageKitError::Io)?;
        }

        let config_path = root.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PageKitError::Serialization)?;
        fs::write(config_path, content).map_err(PageKitError::Io)?;
        Ok(())
    }

    pub fn exists<P: AsRef<Path>>(root: P) -> bool {
        root.as_ref().join(CONFIG_FILENAME).exists()
    }

    /// Get the template extension (ensures it starts with a dot)
    pub fn get_template_ext(&self) -> &str {
        &self.template_ext
    }

    /// Set the template extension (normalizes to start with a dot)
    pub fn set_template_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.template_ext = ext.to_string();
        } else {
            self.template_ext = format!(".{}", ext);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.app, "app");
        assert_eq!(config.template_ext, ".html");
        assert_eq!(config.handlers_file, "src/handlers.rs");
        assert_eq!(config.routes_file, "src/routes.rs");
    }

    #[test]
    fn test_set_template_ext_without_dot() {
        let mut config = SiteConfig::default();
        config.set_template_ext("tera");
        assert_eq!(config.template_ext, ".tera");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::load(temp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = SiteConfig::default();
        config.app = "intranet".to_string();
        config.set_template_ext(".tera");
        config.save(temp.path()).unwrap();

        let loaded = SiteConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.app, "intranet");
        assert_eq!(loaded.template_ext, ".tera");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pagekit.json"), r#"{"app": "shop"}"#).unwrap();

        let loaded = SiteConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.app, "shop");
        assert_eq!(loaded.template_ext, ".html");
    }
}

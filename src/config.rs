//! Factory configuration
//!
//! A small RON file with the tunables that are not part of any single
//! recipe. Missing fields fall back to their defaults, so an empty `()`
//! is a valid config.
//!
//! ```ron
//! (
//!     lightning_protection_radius: 40.0,
//!     catalog_path: Some("assets/catalog.ron.br"),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FactoryError;
use crate::recipe::{load_catalog, Catalog, ShowLimit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Radius in which lightning rods and power captors shield objects
    pub lightning_protection_radius: f32,
    /// Map reveal radius of the main base
    pub base_show_limit: f32,
    /// Map reveal radius of the thumper robot
    pub thumper_show_limit: f32,
    /// Catalog file replacing the built-in recipes
    pub catalog_path: Option<PathBuf>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            lightning_protection_radius: 40.0,
            base_show_limit: 200.0,
            thumper_show_limit: 400.0,
            catalog_path: None,
        }
    }
}

impl FactoryConfig {
    /// Read a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FactoryError> {
        let contents = fs::read_to_string(path)?;
        let config: FactoryConfig = ron::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file, falling back to the defaults if it is missing or
    /// broken.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), FactoryError> {
        let radii = [
            ("lightning_protection_radius", self.lightning_protection_radius),
            ("base_show_limit", self.base_show_limit),
            ("thumper_show_limit", self.thumper_show_limit),
        ];
        for (name, value) in radii {
            if !value.is_finite() || value < 0.0 {
                return Err(FactoryError::Validation(format!("{} must be >= 0, got {}", name, value)));
            }
        }
        Ok(())
    }

    /// Radius in world units for a recipe's show-limit setting.
    pub fn show_limit_radius(&self, limit: ShowLimit) -> f32 {
        match limit {
            ShowLimit::None => 0.0,
            ShowLimit::Base => self.base_show_limit,
            ShowLimit::LightningProtection => self.lightning_protection_radius,
            ShowLimit::Thumper => self.thumper_show_limit,
            ShowLimit::Radius(r) => r,
        }
    }

    /// The catalog to build from: the override file if configured, else the
    /// built-in recipes.
    pub fn catalog(&self) -> Result<Catalog, FactoryError> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::standard().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FactoryConfig = ron::from_str("()").unwrap();
        assert_eq!(config, FactoryConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(thumper_show_limit: 250.0)").unwrap();

        let config = FactoryConfig::load(file.path()).unwrap();
        assert_eq!(config.thumper_show_limit, 250.0);
        assert_eq!(config.base_show_limit, 200.0);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(base_show_limit: -1.0)").unwrap();

        assert!(matches!(FactoryConfig::load(file.path()), Err(FactoryError::Validation(_))));
        assert_eq!(FactoryConfig::load_or_default(file.path()), FactoryConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = FactoryConfig::load_or_default(dir.path().join("factory.ron"));
        assert_eq!(config, FactoryConfig::default());
    }

    #[test]
    fn test_show_limit_resolution() {
        let config = FactoryConfig::default();
        assert_eq!(config.show_limit_radius(ShowLimit::None), 0.0);
        assert_eq!(config.show_limit_radius(ShowLimit::Base), 200.0);
        assert_eq!(config.show_limit_radius(ShowLimit::LightningProtection), 40.0);
        assert_eq!(config.show_limit_radius(ShowLimit::Thumper), 400.0);
        assert_eq!(config.show_limit_radius(ShowLimit::Radius(12.0)), 12.0);
    }
}

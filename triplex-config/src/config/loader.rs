// Configuration loader

use std::path::Path;

use super::validation::Validator;
use crate::error::{ConfigError, ConfigResult};
use crate::{TriplexDeclaration, TriplexSettings, TriplexTomlConfig};

pub struct TriplexConfigLoader;

impl TriplexConfigLoader {
    /// Load and validate triplex declarations from a toml file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use triplex_config::TriplexConfigLoader;
    ///
    /// let declarations = TriplexConfigLoader::load("triplex.toml").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Vec<TriplexDeclaration>> {
        Self::load_settings(path).map(|settings| settings.declarations)
    }

    /// Load and validate triplex declarations from toml text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> ConfigResult<Vec<TriplexDeclaration>> {
        Self::settings_from_str(text).map(|settings| settings.declarations)
    }

    /// Load and validate a toml file, keeping `constants.max_active` for sizing the runtime pool
    pub fn load_settings<P: AsRef<Path>>(path: P) -> ConfigResult<TriplexSettings> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load and validate toml text, keeping `constants.max_active` for sizing the runtime pool
    pub fn settings_from_str(text: &str) -> ConfigResult<TriplexSettings> {
        Self::parse(text, "<string>")
    }

    fn parse(text: &str, origin: &str) -> ConfigResult<TriplexSettings> {
        let config: TriplexTomlConfig = toml::from_str(text).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        Validator::validate_settings(&config)
    }
}

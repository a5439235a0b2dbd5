// Centralized validation logic

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::action::ActionSpec;
use crate::error::{ConfigError, ConfigResult};
use crate::types::*;
use crate::TriplexTomlConfig;

pub struct Validator;

impl Validator {
    /// Validate all configuration, returning the triplex declarations in declaration order
    pub fn validate_all(config: &TriplexTomlConfig) -> ConfigResult<Vec<TriplexDeclaration>> {
        Self::validate_settings(config).map(|settings| settings.declarations)
    }

    /// Validate all configuration, returning the runtime capacity together with the declarations
    pub fn validate_settings(config: &TriplexTomlConfig) -> ConfigResult<TriplexSettings> {
        Self::validate_constants(&config.constants)?;

        let mut names = HashSet::new();
        let mut declarations = Vec::with_capacity(config.triplex.len());
        for triplex in &config.triplex {
            let declaration = Self::validate_triplex(triplex, &config.constants, config.layout.as_ref())?;
            if !names.insert(declaration.name.clone()) {
                return Err(ConfigError::Validation {
                    field: format!("triplex.{}", declaration.name),
                    message: "duplicated triplex name".into(),
                });
            }
            declarations.push(declaration);
        }
        Ok(TriplexSettings {
            max_active: config.constants.max_active,
            declarations,
        })
    }

    /// Validate triplex constants configuration
    pub fn validate_constants(constants: &TriplexConstantsConfig) -> ConfigResult<()> {
        if constants.max_active == 0 {
            return Err(ConfigError::InvalidValue {
                field: "constants.max_active".into(),
                value: "0".into(),
                expected: "at least 1".into(),
            });
        }
        Self::validate_limit(
            "constants.max_shared_key_positions",
            constants.max_shared_key_positions,
            SHARED_KEY_POSITIONS_LIMIT,
        )?;
        Self::validate_limit(
            "constants.max_shared_layers",
            constants.max_shared_layers,
            SHARED_LAYERS_LIMIT,
        )
    }

    fn validate_limit(field: &str, value: usize, limit: usize) -> ConfigResult<()> {
        if value > limit {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                expected: format!("between 0 and {}", limit),
            });
        }
        Ok(())
    }

    /// Validate a single triplex definition and parse its bindings
    pub fn validate_triplex(
        triplex: &TriplexDefinition,
        constants: &TriplexConstantsConfig,
        layout: Option<&LayoutConfig>,
    ) -> ConfigResult<TriplexDeclaration> {
        if triplex.name.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "triplex.name".into(),
                message: "triplex name must not be empty".into(),
            });
        }
        let field = |key: &str| format!("triplex.{}.{}", triplex.name, key);

        let [first_press, hold, interrupt] = <&[String; 3]>::try_from(triplex.bindings.as_slice()).map_err(|_| {
            ConfigError::InvalidValue {
                field: field("bindings"),
                value: format!("{} bindings", triplex.bindings.len()),
                expected: "exactly 3 bindings: first-press, hold and interrupt".into(),
            }
        })?;
        let parse = |binding: &String| {
            ActionSpec::parse(binding).map_err(|message| ConfigError::Validation {
                field: field("bindings"),
                message,
            })
        };
        let (first_press, hold, interrupt) = (parse(first_press)?, parse(hold)?, parse(interrupt)?);

        Self::validate_shared(
            &field("shared_key_positions"),
            &triplex.shared_key_positions,
            constants.max_shared_key_positions,
            layout.map(|l| l.keys),
        )?;
        Self::validate_shared(
            &field("shared_layers"),
            &triplex.shared_layers,
            constants.max_shared_layers,
            layout.map(|l| l.layers),
        )?;

        Ok(TriplexDeclaration {
            name: triplex.name.clone(),
            first_press,
            hold,
            interrupt,
            shared_key_positions: triplex.shared_key_positions.clone(),
            shared_layers: triplex.shared_layers.clone(),
        })
    }

    /// Check the length of a shared list, its duplicates and its values against the keymap size
    fn validate_shared<T>(field: &str, shared: &[T], capacity: usize, bound: Option<T>) -> ConfigResult<()>
    where
        T: Copy + Eq + Hash + PartialOrd + Display,
    {
        if shared.len() > capacity {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: format!("{} entries", shared.len()),
                expected: format!("at most {} entries", capacity),
            });
        }
        let mut seen = HashSet::new();
        for &value in shared {
            if !seen.insert(value) {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!("{} is listed more than once", value),
                });
            }
            if let Some(bound) = bound.filter(|&bound| value >= bound) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    expected: format!("less than {}", bound),
                });
            }
        }
        Ok(())
    }
}

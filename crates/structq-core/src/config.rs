//! Compiler configuration, loadable from TOML.

use crate::{dialect::DialectKind, error::ConfigError, naming::NamingCase};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

///
/// CompilerConfig
///
/// ```toml
/// dialect = "postgres"
/// naming = "snake"
/// column_prefix = "u."
/// expand_list_args = true
/// skip_zero_values = true
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub dialect: DialectKind,

    /// Case applied to field names that carry no `field` tag.
    pub naming: NamingCase,

    /// Text prepended to every derived column name.
    pub column_prefix: Option<String>,

    /// Expand a list argument bound to one placeholder into one placeholder
    /// per element.
    pub expand_list_args: bool,

    /// Treat zero-valued plain fields as "not provided".
    /// `Option<T>` fields are governed by presence alone either way.
    pub skip_zero_values: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::default(),
            naming: NamingCase::default(),
            column_prefix: None,
            expand_list_args: true,
            skip_zero_values: true,
        }
    }
}

impl CompilerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&input)
    }
}

use std::path::PathBuf;
use thiserror::Error as ThisError;

// re-exports
pub use structq_grammar::TagError;

///
/// ConfigError
///
/// Failure to load a `CompilerConfig`. Compilation itself never fails;
/// configuration is the only fallible boundary of the core.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid compiler config: {0}")]
    Parse(#[from] toml::de::Error),
}

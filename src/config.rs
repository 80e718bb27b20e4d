use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bi_palette::{ModelRegistry, CSS_MODEL_NAME};

use crate::codec::{Decoder, DEFAULT_MAX_HEADER_LEN};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "BI_CONFIG";

/// Codec settings loaded from a YAML file
///
/// ```yaml
/// model: hex
/// compress: true
/// parallel: false
/// max_header_len: 256
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BiConfig {
    /// Color model used when encoding without an explicit model
    #[serde(default = "default_model")]
    pub model: String,

    /// Wrap encoder output in gzip
    #[serde(default)]
    pub compress: bool,

    /// Decode rows on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Bound on the header line in bytes
    #[serde(default = "default_max_header_len")]
    pub max_header_len: usize,
}

fn default_model() -> String {
    CSS_MODEL_NAME.to_string()
}

fn default_parallel() -> bool {
    true
}

fn default_max_header_len() -> usize {
    DEFAULT_MAX_HEADER_LEN
}

impl BiConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::debug!(
                        path = %path.display(),
                        model = %config.model,
                        compress = config.compress,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Path named by `BI_CONFIG`, if set
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV).map(PathBuf::from)
    }

    /// Load from an explicit path, else from `BI_CONFIG`, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit.map(Path::to_path_buf).or_else(Self::env_path) {
            Some(path) => Self::load(&path),
            None => Self::default(),
        }
    }

    /// A decoder using these settings
    pub fn decoder(&self, registry: Arc<ModelRegistry>) -> Decoder {
        Decoder::new(registry)
            .parallel(self.parallel)
            .max_header_len(self.max_header_len)
    }
}

impl Default for BiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            compress: false,
            parallel: default_parallel(),
            max_header_len: default_max_header_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = BiConfig::default();
        assert_eq!(config.model, "v1");
        assert!(!config.compress);
        assert!(config.parallel);
        assert_eq!(config.max_header_len, 128);
    }

    #[test]
    fn test_load_full() {
        let file = write_config("model: hex\ncompress: true\nparallel: false\nmax_header_len: 256\n");
        let config = BiConfig::load(file.path());
        assert_eq!(
            config,
            BiConfig {
                model: "hex".to_string(),
                compress: true,
                parallel: false,
                max_header_len: 256,
            }
        );
    }

    #[test]
    fn test_load_partial_uses_defaults() {
        let file = write_config("compress: true\n");
        let config = BiConfig::load(file.path());
        assert_eq!(config.model, "v1");
        assert!(config.compress);
        assert!(config.parallel);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = BiConfig::load(&dir.path().join("absent.yaml"));
        assert_eq!(config, BiConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let file = write_config("model: [unclosed\n");
        assert_eq!(BiConfig::load(file.path()), BiConfig::default());

        let file = write_config("colour_model: hex\n");
        assert_eq!(BiConfig::load(file.path()), BiConfig::default());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let file = write_config("model: hex\n");
        assert_eq!(BiConfig::resolve(Some(file.path())).model, "hex");
    }

    #[test]
    fn test_decoder_honors_header_bound() {
        let config = BiConfig {
            max_header_len: 4,
            ..BiConfig::default()
        };
        let decoder = config.decoder(Arc::new(ModelRegistry::with_builtins()));
        assert!(decoder.decode(&b"bi,v1\nred\n"[..]).is_err());
    }
}

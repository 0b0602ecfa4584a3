//! Layered configuration.
//!
//! Built-in defaults, then a TOML file, then `SIFT_*` environment variables.
//! Nested keys use a double underscore: `SIFT_URL__REQUIRE_PROTOCOL=true`.
//! Command-line flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use sift_validator::validators::{FqdnOptions, UrlOptions};

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sift.toml";

pub const ENV_PREFIX: &str = "SIFT_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub url: UrlOptions,
    pub fqdn: FqdnOptions,
}

impl SiftConfig {
    /// Loads the layered config. An explicit `path` must exist; the default
    /// file is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        tracing::debug!(file = %file.display(), "loading config");

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("invalid configuration (file {})", file.display()))
    }
}

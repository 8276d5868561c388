//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `FOLDIT__*` environment variables, e.g. `FOLDIT__KUBE__NAMESPACE`
//! 3. The file passed with `--config`
//! 4. `./foldit.toml`
//! 5. The global file in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use foldit_core::domain::{DbProvider, PackageManager};

use crate::error::{CliError, CliResult};

/// Project-local configuration file name.
pub const LOCAL_FILE: &str = "foldit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub packages: PackagesConfig,
    pub docker: DockerDefaults,
    pub kube: KubeDefaults,
    pub api: ApiDefaults,
    pub prisma: PrismaDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesConfig {
    pub auto_install: bool,
    /// Forces a manager instead of detecting it from lock files.
    pub manager: Option<PackageManager>,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            auto_install: true,
            manager: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerDefaults {
    pub node_version: String,
    pub port: u16,
}

impl Default for DockerDefaults {
    fn default() -> Self {
        Self {
            node_version: "18-alpine".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KubeDefaults {
    pub namespace: String,
    pub replicas: u32,
    pub port: u16,
    pub image_name: String,
    pub image_tag: String,
}

impl Default for KubeDefaults {
    fn default() -> Self {
        Self {
            namespace: "default".into(),
            replicas: 2,
            port: 3000,
            image_name: "nextjs-app".into(),
            image_tag: "latest".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDefaults {
    /// Comma separated, same syntax as `--methods`.
    pub methods: String,
}

impl Default for ApiDefaults {
    fn default() -> Self {
        Self {
            methods: "GET,POST".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismaDefaults {
    pub provider: DbProvider,
}

impl AppConfig {
    /// Load configuration from every layer that exists.
    ///
    /// Missing global and local files are fine; a missing `--config` file
    /// is an error.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some(global) = Self::config_path() {
            debug!(path = %global.display(), "Global config candidate");
            builder = builder.add_source(File::from(global).required(false));
        }
        builder = builder.add_source(File::from(PathBuf::from(LOCAL_FILE)).required(false));
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("FOLDIT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| CliError::Config {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the global configuration file, if the platform has a config
    /// directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "foldit", "foldit")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write as _;

    #[test]
    fn defaults_match_command_defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert!(cfg.packages.auto_install);
        assert_eq!(cfg.packages.manager, None);
        assert_eq!(cfg.docker.node_version, "18-alpine");
        assert_eq!(cfg.kube.replicas, 2);
        assert_eq!(cfg.api.methods, "GET,POST");
        assert_eq!(cfg.prisma.provider, DbProvider::Sqlite);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[kube]\nnamespace = \"web\"\n\n[packages]\nmanager = \"pnpm\"\n\n[prisma]\nprovider = \"postgresql\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.kube.namespace, "web");
        assert_eq!(cfg.kube.replicas, 2);
        assert_eq!(cfg.packages.manager, Some(PackageManager::Pnpm));
        assert_eq!(cfg.prisma.provider, DbProvider::Postgresql);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn config_path_ends_with_file_name() {
        if let Some(p) = AppConfig::config_path() {
            assert!(p.ends_with("config.toml"));
        }
    }
}

//! Layered configuration: built-in defaults < global config file < CLI flags.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use jaruid_util::errors::JarUidError;

/// A remote Maven repository: base URL plus optional credentials.
///
/// Maven Central is always appended as a fallback after any repositories
/// discovered from `~/.m2/settings.xml` or configured explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteRepository {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RemoteRepository {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            username: None,
            password: None,
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Maven Central, always present as the final fallback.
    pub fn central() -> Self {
        Self::new("central", "https://repo1.maven.org/maven2/")
    }
}

/// Per-component selector `K`: how many top candidates to probe online.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorK {
    #[serde(default = "default_k")]
    pub group_id: usize,
    #[serde(default = "default_k")]
    pub artifact_id: usize,
    #[serde(default = "default_k")]
    pub version: usize,
}

impl Default for SelectorK {
    fn default() -> Self {
        Self {
            group_id: default_k(),
            artifact_id: default_k(),
            version: default_k(),
        }
    }
}

fn default_k() -> usize {
    2
}

/// The global config file shape, `~/.jaruid/config.toml`. Every field is
/// optional; absence means "use the built-in default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub selector: Option<SelectorKFile>,
    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryFile>,
    #[serde(default)]
    pub concurrency: Option<usize>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub max_retries: Option<u32>,
    #[serde(default)]
    pub report_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorKFile {
    pub group_id: Option<usize>,
    pub artifact_id: Option<usize>,
    pub version: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryFile {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl GlobalConfig {
    /// Load from `~/.jaruid/config.toml`, or return defaults if absent.
    pub fn load() -> Result<Self, JarUidError> {
        let path = Self::default_path();
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| JarUidError::Config {
                message: format!("failed to read global config {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| JarUidError::Config {
                message: format!("failed to parse global config {}: {e}", path.display()),
            })
        } else {
            Ok(Self::default())
        }
    }

    pub fn default_path() -> PathBuf {
        jaruid_util::dirs_path().join("config.toml")
    }
}

/// CLI-level overrides for a single `analyze` invocation.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub offline: bool,
    pub limit: Option<usize>,
    pub skip_not_found: bool,
    pub force_detailed_output: bool,
    pub report_file: Option<String>,
}

/// The fully resolved knob set the rest of the pipeline consumes.
#[derive(Debug, Clone)]
pub struct Config {
    pub selector_k: SelectorK,
    pub online_enabled: bool,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub repositories: Vec<RemoteRepository>,
    pub report_path_template: String,
    pub concurrency_limit: usize,
    pub limit: Option<usize>,
    pub skip_not_found: bool,
    pub force_detailed_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector_k: SelectorK::default(),
            online_enabled: true,
            request_timeout_secs: 120,
            max_retries: 3,
            repositories: Vec::new(),
            report_path_template: "./jar-analysis-report.json".to_string(),
            concurrency_limit: 8,
            limit: None,
            skip_not_found: false,
            force_detailed_output: false,
        }
    }
}

impl Config {
    /// Merge built-in defaults, the global config file, and CLI overrides,
    /// in that precedence order (later layers win).
    pub fn resolve(global: &GlobalConfig, cli: &CliOverrides) -> Self {
        let mut config = Config::default();

        if let Some(selector) = &global.selector {
            if let Some(k) = selector.group_id {
                config.selector_k.group_id = k;
            }
            if let Some(k) = selector.artifact_id {
                config.selector_k.artifact_id = k;
            }
            if let Some(k) = selector.version {
                config.selector_k.version = k;
            }
        }
        for (name, repo) in &global.repositories {
            let mut remote = RemoteRepository::new(name.clone(), repo.url.clone());
            if let (Some(u), Some(p)) = (&repo.username, &repo.password) {
                remote = remote.with_credentials(u.clone(), p.clone());
            }
            config.repositories.push(remote);
        }
        if let Some(n) = global.concurrency {
            config.concurrency_limit = n;
        }
        if let Some(secs) = global.request_timeout_secs {
            config.request_timeout_secs = secs;
        }
        if let Some(n) = global.max_retries {
            config.max_retries = n;
        }
        if let Some(path) = &global.report_path {
            config.report_path_template = path.clone();
        }

        config.online_enabled = !cli.offline;
        config.limit = cli.limit;
        config.skip_not_found = cli.skip_not_found;
        config.force_detailed_output = cli.force_detailed_output;
        if let Some(path) = &cli.report_file {
            config.report_path_template = path.clone();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_k_of_two() {
        let config = Config::default();
        assert_eq!(config.selector_k.group_id, 2);
        assert_eq!(config.selector_k.artifact_id, 2);
        assert_eq!(config.selector_k.version, 2);
    }

    #[test]
    fn global_config_overrides_defaults() {
        let mut global = GlobalConfig::default();
        global.selector = Some(SelectorKFile {
            group_id: Some(4),
            artifact_id: None,
            version: None,
        });
        global.concurrency = Some(16);

        let config = Config::resolve(&global, &CliOverrides::default());
        assert_eq!(config.selector_k.group_id, 4);
        assert_eq!(config.selector_k.artifact_id, 2);
        assert_eq!(config.concurrency_limit, 16);
    }

    #[test]
    fn cli_offline_flag_disables_online() {
        let cli = CliOverrides {
            offline: true,
            ..Default::default()
        };
        let config = Config::resolve(&GlobalConfig::default(), &cli);
        assert!(!config.online_enabled);
    }

    #[test]
    fn cli_report_file_overrides_global_path() {
        let mut global = GlobalConfig::default();
        global.report_path = Some("./from-global.json".to_string());
        let cli = CliOverrides {
            report_file: Some("./from-cli.json".to_string()),
            ..Default::default()
        };
        let config = Config::resolve(&global, &cli);
        assert_eq!(config.report_path_template, "./from-cli.json");
    }

    #[test]
    fn central_is_a_fixed_fallback_constant() {
        let central = RemoteRepository::central();
        assert_eq!(central.name, "central");
        assert_eq!(central.url, "https://repo1.maven.org/maven2/");
    }
}

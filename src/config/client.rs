// src/config/client.rs
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const ENV_CLIENT_CONFIG: &str = "PHONE_SCORE_CLIENT_CONFIG";
pub const ENV_API_URL: &str = "PHONE_SCORE_API_URL";
pub const ENV_REMOTE: &str = "PHONE_SCORE_REMOTE";
pub const ENV_TIMEOUT_SECS: &str = "PHONE_SCORE_TIMEOUT_SECS";

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_remote_enabled() -> bool {
    true
}
fn default_user_agent() -> String {
    concat!("phone-score/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Where and how the evaluation client reaches the remote scoring API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `false` skips the remote entirely; every call uses the local engine.
    #[serde(default = "default_remote_enabled")]
    pub remote_enabled: bool,
    /// Whole-request timeout. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            remote_enabled: default_remote_enabled(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Load from an explicit path. `.toml` is parsed as TOML, anything else as JSON.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading client config from {}", path.display()))?;
        let is_toml = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let cfg: ClientConfig = if is_toml {
            toml::from_str(&data)
                .with_context(|| format!("parsing TOML client config {}", path.display()))?
        } else {
            serde_json::from_str(&data)
                .with_context(|| format!("parsing JSON client config {}", path.display()))?
        };
        Ok(cfg.normalized())
    }

    /// File + env:
    /// 1) $PHONE_SCORE_CLIENT_CONFIG (must exist)
    /// 2) config/client.toml
    /// 3) config/client.json
    /// 4) defaults
    ///
    /// then `PHONE_SCORE_API_URL`, `PHONE_SCORE_REMOTE`, `PHONE_SCORE_TIMEOUT_SECS` override.
    pub fn from_env() -> Result<Self> {
        let mut cfg = match env::var(ENV_CLIENT_CONFIG) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    bail!("{ENV_CLIENT_CONFIG} points to non-existent path {}", pb.display());
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let toml_p = Path::new("config/client.toml");
                let json_p = Path::new("config/client.json");
                if toml_p.exists() {
                    Self::load_from_file(toml_p)?
                } else if json_p.exists() {
                    Self::load_from_file(json_p)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(url) = env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                cfg.base_url = url;
            }
        }
        if let Ok(v) = env::var(ENV_REMOTE) {
            cfg.remote_enabled = parse_flag(&v)
                .ok_or_else(|| anyhow!("{ENV_REMOTE} must be 0/1/true/false, got '{v}'"))?;
        }
        if let Ok(v) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_SECS} must be whole seconds, got '{v}'"))?;
            cfg.timeout_secs = Some(secs);
        }

        Ok(cfg.normalized())
    }

    fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if self.base_url.is_empty() {
            self.base_url = default_base_url();
        }
        self
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_and_toml_files() {
        let dir = tempfile::tempdir().unwrap();

        let p_json = dir.path().join("client.json");
        fs::write(&p_json, r#"{"base_url": "http://scores.local/", "timeout_secs": 3}"#).unwrap();
        let cfg = ClientConfig::load_from_file(&p_json).unwrap();
        assert_eq!(cfg.base_url, "http://scores.local");
        assert_eq!(cfg.timeout_secs, Some(3));
        assert!(cfg.remote_enabled);

        let p_toml = dir.path().join("client.toml");
        fs::write(&p_toml, "remote_enabled = false\n").unwrap();
        let cfg = ClientConfig::load_from_file(&p_toml).unwrap();
        assert!(!cfg.remote_enabled);
        assert_eq!(cfg.base_url, "http://localhost:8000");
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("maybe"), None);
    }
}

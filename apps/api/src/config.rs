use anyhow::{bail, Context, Result};

use crate::models::user::UserRole;
use crate::store::ReanalysisPolicy;

/// Which semantic scorer backs the relevance computation.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticBackend {
    Random,
    Fixed(f64),
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub reanalysis_policy: ReanalysisPolicy,
    pub seed_demo_data: bool,
    pub semantic_backend: SemanticBackend,
    pub operator: OperatorConfig,
}

/// The operator shown in the navigation shell and used as the default uploader.
#[derive(Debug, Clone)]
pub struct OperatorConfig {
    pub name: String,
    pub email: String,
    pub location: String,
    pub role: UserRole,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            name: "Rahul Sharma".to_string(),
            email: "rahul.sharma@innomatics.in".to_string(),
            location: "Hyderabad".to_string(),
            role: UserRole::PlacementTeam,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            reanalysis_policy: ReanalysisPolicy::Append,
            seed_demo_data: true,
            semantic_backend: SemanticBackend::Random,
            operator: OperatorConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let port = match optional_env("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let reanalysis_policy = match optional_env("REANALYSIS_POLICY") {
            Some(v) => v.parse::<ReanalysisPolicy>()?,
            None => defaults.reanalysis_policy,
        };

        let seed_demo_data = match optional_env("SEED_DEMO_DATA") {
            Some(v) => parse_bool("SEED_DEMO_DATA", &v)?,
            None => defaults.seed_demo_data,
        };

        let semantic_backend = match optional_env("SEMANTIC_SCORER").as_deref() {
            None | Some("random") => SemanticBackend::Random,
            Some("fixed") => {
                let score = optional_env("SEMANTIC_FIXED_SCORE")
                    .map(|v| {
                        v.parse::<f64>()
                            .context("SEMANTIC_FIXED_SCORE must be a number")
                    })
                    .transpose()?
                    .unwrap_or(75.0);
                if !(0.0..=100.0).contains(&score) {
                    bail!("SEMANTIC_FIXED_SCORE must be within 0..=100, got {score}");
                }
                SemanticBackend::Fixed(score)
            }
            Some(other) => bail!("SEMANTIC_SCORER must be 'random' or 'fixed', got '{other}'"),
        };

        let operator_defaults = defaults.operator;
        let operator = OperatorConfig {
            name: optional_env("OPERATOR_NAME").unwrap_or(operator_defaults.name),
            email: optional_env("OPERATOR_EMAIL").unwrap_or(operator_defaults.email),
            location: optional_env("OPERATOR_LOCATION").unwrap_or(operator_defaults.location),
            role: match optional_env("OPERATOR_ROLE") {
                Some(v) => v.parse::<UserRole>()?,
                None => operator_defaults.role,
            },
        };

        Ok(Config {
            port,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            reanalysis_policy,
            seed_demo_data,
            semantic_backend,
            operator,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_append_and_seed() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.reanalysis_policy, ReanalysisPolicy::Append);
        assert!(config.seed_demo_data);
        assert_eq!(config.semantic_backend, SemanticBackend::Random);
        assert_eq!(config.operator.role, UserRole::PlacementTeam);
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }
}

use std::fmt;

use anyhow::anyhow;

/// Environment variable carrying the deploy flag.
pub const DEPLOY_FLAG_ENV: &str = "USUARIO_ENV";

pub const PRODUCTION_URL: &str =
    "https://southamerica-east1-consultoria-legal-dev.cloudfunctions.net/service_usuario";
pub const DEVELOPMENT_URL: &str =
    "http://127.0.0.1:5001/consultoria-legal-dev/southamerica-east1/service_usuario";

/// Deployment environment, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Maps the ambient deploy flag to an environment. Only the exact value
    /// `production` selects the production endpoint; anything else, unset
    /// included, is local development.
    pub fn from_deploy_flag(value: Option<&str>) -> Self {
        match value {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Resolves the deploy flag from the process environment.
    pub fn from_ambient() -> Self {
        let flag = std::env::var(DEPLOY_FLAG_ENV).ok();
        Self::from_deploy_flag(flag.as_deref())
    }

    /// Fixed prefix for all relative request paths in this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Development => DEVELOPMENT_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            _ => Err(anyhow!(
                "unknown environment: {} (expected 'production' or 'development')",
                s
            )),
        }
    }
}

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::StaffError;

pub const ENV_PREFIX: &str = "STAFFDESK_";

/// Runtime settings. Defaults, then raw `DATABASE_URL`/`PORT`, then `STAFFDESK_*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub listen_addr: String,
    pub http_port: Option<u16>,
    pub http_enabled: bool,
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:staffdesk.db".to_string(),
            loglevel: "info".to_string(),
            listen_addr: "127.0.0.1".to_string(),
            http_port: Some(3001),
            http_enabled: true,
            init_schema: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, StaffError> {
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["database_url", "port"]).map(|key| {
                if key.as_str().eq_ignore_ascii_case("port") {
                    "http_port".into()
                } else {
                    key.as_str().to_ascii_lowercase().into()
                }
            }))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, StaffError> {
        Ok(figment.extract()?)
    }

    pub fn listen_socket(&self) -> Option<String> {
        self.http_port
            .filter(|_| self.http_enabled)
            .map(|port| format!("{}:{}", self.listen_addr, port))
    }
}

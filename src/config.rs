use crate::chains::{SupportedChainId, CLIENT_CHAINS, FALLBACK_CHAIN_ID};
use crate::domain::ForceCooldowns;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cooldowns: ForceCooldowns,
    pub supported_chains: Vec<SupportedChainId>,
    pub fallback_chain: SupportedChainId,
    pub markets_file: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let cooldowns = ForceCooldowns::new(
            required_secs(&env_map, "FORCE_CLOSE_FIRST_COOLDOWN")?,
            required_secs(&env_map, "FORCE_CLOSE_SECOND_COOLDOWN")?,
            required_secs(&env_map, "FORCE_CLOSE_MIN_SIG_PERIOD")?,
        );

        let supported_chains = match env_map.get("SUPPORTED_CHAINS") {
            Some(list) => parse_chain_list(list)?,
            None => CLIENT_CHAINS.to_vec(),
        };

        let fallback_chain = match env_map.get("FALLBACK_CHAIN_ID") {
            Some(raw) => parse_chain("FALLBACK_CHAIN_ID", raw)?,
            None => FALLBACK_CHAIN_ID,
        };
        if !supported_chains.contains(&fallback_chain) {
            return Err(ConfigError::InvalidValue(
                "FALLBACK_CHAIN_ID".to_string(),
                format!("chain {} is not in SUPPORTED_CHAINS", fallback_chain),
            ));
        }

        let markets_file = env_map
            .get("MARKETS_FILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Config {
            port,
            cooldowns,
            supported_chains,
            fallback_chain,
            markets_file,
        })
    }
}

fn required_secs(env_map: &HashMap<String, String>, key: &str) -> Result<i64, ConfigError> {
    let raw = env_map
        .get(key)
        .ok_or_else(|| ConfigError::MissingEnv(key.to_string()))?;
    match raw.trim().parse::<i64>() {
        Ok(secs) if secs >= 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be a non-negative number of seconds".to_string(),
        )),
    }
}

fn parse_chain(key: &str, raw: &str) -> Result<SupportedChainId, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue(key.to_string(), format!("not a chain id: {}", raw)))
        .and_then(|id| {
            SupportedChainId::try_from(id)
                .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
        })
}

fn parse_chain_list(list: &str) -> Result<Vec<SupportedChainId>, ConfigError> {
    let chains = list
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| parse_chain("SUPPORTED_CHAINS", s))
        .collect::<Result<Vec<_>, _>>()?;
    if chains.is_empty() {
        return Err(ConfigError::InvalidValue(
            "SUPPORTED_CHAINS".to_string(),
            "must list at least one chain".to_string(),
        ));
    }
    Ok(chains)
}

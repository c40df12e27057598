use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use log::warn;

const PARAM_SUB_TOPIC: &str = "BRIDGE_SUB_TOPIC";
const PARAM_PUB_TOPIC: &str = "BRIDGE_PUB_TOPIC";
const PARAM_QUEUE_DEPTH: &str = "BRIDGE_QUEUE_DEPTH";
const PARAM_DOMAIN_ID: &str = "BRIDGE_DOMAIN_ID";
const DEFAULT_SUB_TOPIC: &str = "plan_status";
const DEFAULT_PUB_TOPIC: &str = "rapid_plan_status";
const DEFAULT_QUEUE_DEPTH: i32 = 10;
const DEFAULT_DOMAIN_ID: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub sub_topic: String,
    pub pub_topic: String,
    pub queue_depth: i32,
    pub domain_id: u16,
}

impl Params {
    pub fn load() -> Result<Self> {
        Ok(Self {
            sub_topic: get_string(PARAM_SUB_TOPIC, DEFAULT_SUB_TOPIC),
            pub_topic: get_string(PARAM_PUB_TOPIC, DEFAULT_PUB_TOPIC),
            queue_depth: get_parsed(PARAM_QUEUE_DEPTH, DEFAULT_QUEUE_DEPTH)?,
            domain_id: get_parsed(PARAM_DOMAIN_ID, DEFAULT_DOMAIN_ID)?,
        })
    }
}

fn get_string(key: &str, default: &str) -> String {
    let Ok(value) = env::var(key) else {
        warn!("Using default value '{default}' for parameter '{key}'");
        return default.to_string();
    };
    value
}

fn get_parsed<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Ok(value) = env::var(key) else {
        warn!("Using default value '{default}' for parameter '{key}'");
        return Ok(default);
    };
    let value = value
        .parse()
        .with_context(|| format!("invalid {key} value '{value}'"))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_unset() {
        assert_eq!(get_string("BRIDGE_TEST_UNSET_STR", "fallback"), "fallback");
        assert_eq!(get_parsed("BRIDGE_TEST_UNSET_INT", 10).unwrap(), 10);
    }

    #[test]
    fn reads_set_value() {
        env::set_var("BRIDGE_TEST_DEPTH", "4");
        assert_eq!(get_parsed("BRIDGE_TEST_DEPTH", 10).unwrap(), 4);
    }

    #[test]
    fn rejects_malformed_value() {
        env::set_var("BRIDGE_TEST_BAD_DEPTH", "ten");
        assert!(get_parsed("BRIDGE_TEST_BAD_DEPTH", 10).is_err());
    }
}

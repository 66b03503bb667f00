use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_PATH: &str = "data/exercise.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    pub weekly_goal: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let db_path = lookup("APP_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        let weekly_goal = lookup("APP_WEEKLY_GOAL")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(0);

        Self {
            port,
            db_path,
            weekly_goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.weekly_goal, 0);
    }

    #[test]
    fn reads_values_and_skips_garbage() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "9090"),
            ("APP_DB_PATH", ":memory:"),
            ("APP_WEEKLY_GOAL", "not-a-number"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 9090);
        assert_eq!(config.db_path, PathBuf::from(":memory:"));
        assert_eq!(config.weekly_goal, 0);
    }
}

use std::str::FromStr;

use blog_core::Dashboard;

/// Which posts the dashboard starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    #[default]
    Sample,
    Empty,
}

impl Seed {
    pub fn dashboard(self) -> Dashboard {
        match self {
            Seed::Sample => Dashboard::seeded(),
            Seed::Empty => Dashboard::empty(),
        }
    }
}

impl FromStr for Seed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(Seed::Sample),
            "empty" => Ok(Seed::Empty),
            other => Err(anyhow::anyhow!("invalid BLOG_SEED: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(anyhow::anyhow!("invalid BLOG_LOG_FORMAT: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub seed: Seed,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let seed = lookup("BLOG_SEED")
            .map(|v| v.parse::<Seed>())
            .transpose()?
            .unwrap_or_default();
        let log_format = lookup("BLOG_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { seed, log_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.seed, Seed::Sample);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_values_case_insensitively() {
        let config = AppConfig::from_lookup(|key| match key {
            "BLOG_SEED" => Some("Empty".into()),
            "BLOG_LOG_FORMAT" => Some("PRETTY".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.seed, Seed::Empty);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.seed.dashboard().posts().is_empty());
    }

    #[test]
    fn rejects_unknown_seed() {
        let err = AppConfig::from_lookup(|key| (key == "BLOG_SEED").then(|| "prod".into()))
            .unwrap_err();
        assert!(err.to_string().contains("BLOG_SEED"));
    }
}

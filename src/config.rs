use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: String,
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: "logs/recipe_finder.log".to_string(),
            level: Some("info".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankerKind {
    Dummy,
    Corpus,
}

impl RankerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankerKind::Dummy => "dummy",
            RankerKind::Corpus => "corpus",
        }
    }
}

impl FromStr for RankerKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dummy" => Ok(RankerKind::Dummy),
            "corpus" => Ok(RankerKind::Corpus),
            other => Err(anyhow!("unknown ranker kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    pub kind: RankerKind,
    pub corpus_path: Option<String>,
    pub top_n: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            kind: RankerKind::Dummy,
            corpus_path: None,
            top_n: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub ranker: RankerConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let explicit_path = std::env::var("CONFIG_FILE").ok();
        let config = if let Some(path) = explicit_path {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(anyhow!("config file {:?} not found", path));
            }
            Self::load_from_file(&path)?
        } else {
            let path = locate_default_config();
            if let Some(path) = path {
                Self::load_from_file(&path)?
            } else {
                AppConfig::default()
            }
        };

        let config = Self::apply_env_overrides(config)?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        Self::from_yaml(&contents).with_context(|| format!("failed to parse config file {:?}", path))
    }

    fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env_overrides(mut config: AppConfig) -> anyhow::Result<AppConfig> {
        if let Ok(bind) = std::env::var("SERVER_BIND") {
            config.server.bind = bind;
        }

        if let Ok(log_file) = std::env::var("LOG_FILE_PATH") {
            config.logging.file = log_file;
        }

        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            config.logging.level = Some(log_level);
        }

        if let Ok(kind) = std::env::var("RANKER_KIND") {
            config.ranker.kind = kind
                .parse::<RankerKind>()
                .context("RANKER_KIND must be one of: dummy, corpus")?;
        }

        if let Ok(path) = std::env::var("RANKER_CORPUS_PATH") {
            config.ranker.corpus_path = Some(path);
        }

        if let Some(top_n) = parse_optional_env("RANKER_TOP_N")? {
            config.ranker.top_n = top_n;
        }

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.ranker.top_n == 0 {
            return Err(anyhow!("ranker.top_n must be at least 1"));
        }

        if self.ranker.kind == RankerKind::Corpus
            && self
                .ranker
                .corpus_path
                .as_deref()
                .map_or(true, |path| path.trim().is_empty())
        {
            return Err(anyhow!(
                "corpus ranker needs a corpus; set RANKER_CORPUS_PATH env var or ranker.corpus_path in config file"
            ));
        }

        Ok(())
    }
}

fn parse_optional_env<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => Ok(Some(
            v.parse::<T>()
                .with_context(|| format!("{key} must be a valid value"))?,
        )),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn locate_default_config() -> Option<PathBuf> {
    let candidates = [
        PathBuf::from("config/config.yaml"),
        PathBuf::from("../config/config.yaml"),
    ];

    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.ranker.kind, RankerKind::Dummy);
        assert_eq!(config.ranker.top_n, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let yaml = "ranker:\n  kind: corpus\n  corpus_path: data/recipes.json\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.ranker.kind, RankerKind::Corpus);
        assert_eq!(config.ranker.corpus_path.as_deref(), Some("data/recipes.json"));
        assert_eq!(config.ranker.top_n, 3);
        assert_eq!(config.logging.file, "logs/recipe_finder.log");
    }

    #[test]
    fn corpus_kind_without_path_is_rejected() {
        let config = AppConfig::from_yaml("ranker:\n  kind: corpus\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("corpus"));
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let config = AppConfig::from_yaml("ranker:\n  top_n: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn ranker_kind_parses_case_insensitively() {
        assert_eq!(" Corpus ".parse::<RankerKind>().unwrap(), RankerKind::Corpus);
        assert_eq!("DUMMY".parse::<RankerKind>().unwrap(), RankerKind::Dummy);
        assert!("kmeans".parse::<RankerKind>().is_err());
    }
}

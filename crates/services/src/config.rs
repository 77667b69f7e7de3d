//! Runtime configuration resolved from command-line overrides, then environment, then defaults.

use std::path::PathBuf;

use tracing::debug;

use quiz_core::{ShareIntent, ShareSettings, SiteUrl};

use crate::error::ConfigError;

pub const DEFAULT_SITE_URL: &str = "https://animal-quiz.example";
pub const DEFAULT_SHARE_BASE: &str = "https://warpcast.com/~/compose";

pub const ENV_SITE_URL: &str = "QUIZ_SITE_URL";
pub const ENV_SHARE_BASE: &str = "QUIZ_SHARE_BASE";
pub const ENV_SEED: &str = "QUIZ_SEED";
pub const ENV_QUESTIONS: &str = "QUIZ_QUESTIONS";

/// Raw values supplied on the command line. Anything left `None` falls back
/// to the environment and then to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub site_url: Option<String>,
    pub share_base: Option<String>,
    pub seed: Option<String>,
    pub questions: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub share: ShareSettings,
    /// Fixed shuffle seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// JSON catalog to load instead of the built-in questions.
    pub questions: Option<PathBuf>,
}

impl QuizConfig {
    /// Resolve configuration. `env` looks up an environment variable by name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a URL or the seed does not parse.
    pub fn resolve(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let pick = |flag: Option<String>, key: &str, default: &str| {
            flag.or_else(|| env(key).filter(|value| !value.trim().is_empty()))
                .unwrap_or_else(|| default.to_string())
        };

        let site_raw = pick(overrides.site_url, ENV_SITE_URL, DEFAULT_SITE_URL);
        let site_url = SiteUrl::parse(&site_raw).map_err(|source| ConfigError::SiteUrl {
            raw: site_raw.clone(),
            source,
        })?;

        let share_raw = pick(overrides.share_base, ENV_SHARE_BASE, DEFAULT_SHARE_BASE);
        let intent = ShareIntent::parse(&share_raw).map_err(|source| ConfigError::ShareBase {
            raw: share_raw.clone(),
            source,
        })?;

        let seed = overrides
            .seed
            .or_else(|| env(ENV_SEED).filter(|value| !value.trim().is_empty()))
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Seed { raw: raw.clone() })
            })
            .transpose()?;

        let questions = overrides.questions.or_else(|| {
            env(ENV_QUESTIONS)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        });

        debug!(
            site_url = %site_url,
            share_base = intent.base(),
            ?seed,
            ?questions,
            "resolved config"
        );

        Ok(Self {
            share: ShareSettings::new(site_url, intent),
            seed,
            questions,
        })
    }

    /// Resolve against the process environment.
    ///
    /// # Errors
    ///
    /// Same as `resolve`.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }
}

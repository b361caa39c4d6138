//! エンジン設定。環境変数から既定値を読み込み、検証する。
//!
//! アナライザ自体は設定を持たないため、ここにあるのは [`crate::Engine`]
//! ファサードが使う呼び出し既定値のみです。すべて省略可能で、
//! 未設定時は固定デフォルトに落ちます。
use std::{env, num::NonZeroUsize};

use thiserror::Error;

#[cfg(test)]
use once_cell::sync::Lazy;
#[cfg(test)]
pub(crate) static ENV_MUTEX: Lazy<std::sync::Mutex<()>> = Lazy::new(|| std::sync::Mutex::new(()));

use crate::lexicon::visual::STYLES;

/// エンジン既定値の設定。
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    default_intensity: f64,
    default_style: String,
    max_concepts: NonZeroUsize,
}

/// 設定読み込みエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_intensity: 0.5,
            default_style: "realistic".to_string(),
            max_concepts: NonZeroUsize::new(5).expect("5 is non-zero"),
        }
    }
}

impl Config {
    /// 環境変数からエンジン設定を読み込む。
    ///
    /// - `SENSE_DEFAULT_INTENSITY`: [0, 1] の数値（デフォルト 0.5）
    /// - `SENSE_DEFAULT_STYLE`: 既知のスタイル名（デフォルト `realistic`）
    /// - `SENSE_MAX_CONCEPTS`: 1以上の整数（デフォルト 5）
    ///
    /// # Errors
    /// 値のパースに失敗した場合や範囲外の場合は [`ConfigError`] を返す。
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_intensity = parse_unit_f64("SENSE_DEFAULT_INTENSITY", 0.5)?;
        let default_style = parse_style("SENSE_DEFAULT_STYLE", "realistic")?;
        let max_concepts = parse_non_zero_usize("SENSE_MAX_CONCEPTS", 5)?;

        Ok(Self {
            default_intensity,
            default_style,
            max_concepts,
        })
    }

    /// 香りプロファイル生成に使う既定強度。
    #[must_use]
    pub fn default_intensity(&self) -> f64 {
        self.default_intensity
    }

    /// 視覚コンセプト生成に使う既定スタイル。
    #[must_use]
    pub fn default_style(&self) -> &str {
        &self.default_style
    }

    /// 視覚コンセプトの既定上限数。
    #[must_use]
    pub fn max_concepts(&self) -> NonZeroUsize {
        self.max_concepts
    }
}

fn parse_unit_f64(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let parsed = raw.parse::<f64>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("must be between 0.0 and 1.0"),
        });
    }
    Ok(parsed)
}

fn parse_style(name: &'static str, default: &str) -> Result<String, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let lowered = raw.to_lowercase();
    if STYLES.iter().any(|s| s.name == lowered) {
        Ok(lowered)
    } else {
        Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("unknown style: {raw}"),
        })
    }
}

fn parse_non_zero_usize(name: &'static str, default: usize) -> Result<NonZeroUsize, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let parsed = raw.parse::<usize>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })?;
    NonZeroUsize::new(parsed).ok_or_else(|| ConfigError::Invalid {
        name,
        source: anyhow::anyhow!("must be greater than zero"),
    })
}

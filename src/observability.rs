//! Tracingサブスクライバの初期化。
//!
//! エンジン自体は純粋計算のため、テレメトリはイベントログのみです。
//! 初期化は一度だけ行われ、2回目以降の呼び出しは無操作になります。
use anyhow::{Error, Result};
use once_cell::sync::OnceCell;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Tracingサブスクライバを一度だけ初期化する。
///
/// `RUST_LOG` が未設定なら `info` レベルでフィルタし、
/// JSON形式のfmtレイヤーで構造化ログを出力します。
///
/// # Errors
/// サブスクライバの初期化に失敗した場合はエラーを返す。
pub fn init() -> Result<()> {
    TRACING_INIT.get_or_try_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false).json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| Error::msg(e.to_string()))?;

        info!("sense-engine telemetry initialized");
        Ok::<(), Error>(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        // グローバルサブスクライバは他のテストが先に設定している場合があるため、
        // 2回目の呼び出しがエラーにならないことだけを確認する。
        let first = init();
        let second = init();
        assert_eq!(first.is_ok(), second.is_ok());
    }
}

//! # ログ出力の初期化
//!
//! API サーバーの起動時に一度だけ [`init_tracing`] を呼ぶ。
//!
//! | 環境変数 | 既定値 | 内容 |
//! |----------|--------|------|
//! | `RUST_LOG` | `info,kanban=debug` | `EnvFilter` 構文のログレベル |
//! | `LOG_FORMAT` | `pretty` | `json` で 1 行 1 イベントの JSON 出力 |
//!
//! 不正な `RUST_LOG` は既定値に置き換える。起動を止めるほどの設定ミスではない。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,kanban=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// ログ基盤に取り込む本番用
    Json,
    /// 端末で読む開発用
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する。`json`（大文字小文字を問わない）以外は `Pretty`
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// トレーシングの初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` に渡すディレクティブ
    pub filter: String,
    pub format: LogFormat,
}

impl TracingConfig {
    /// `RUST_LOG` と `LOG_FORMAT` から設定を読む
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    /// 環境変数の値から設定を組み立てる
    pub fn from_values(rust_log: Option<&str>, log_format: Option<&str>) -> Self {
        let filter = rust_log
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_FILTER);
        Self {
            filter: filter.to_string(),
            format: LogFormat::from_value(log_format),
        }
    }
}

/// グローバル subscriber を登録する
///
/// `ErrorLayer` を含めるため、`kanban_infra::InfraError` が捕捉する `SpanTrace` に
/// ハンドラとリポジトリのスパンが残る。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{
        EnvFilter,
        Layer as _,
        fmt,
        layer::SubscriberExt,
        util::SubscriberInitExt,
    };

    let env_filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => fmt::layer().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_未設定なら既定のフィルタとprettyになる() {
        let config = TracingConfig::from_values(None, None);

        assert_eq!(
            config,
            TracingConfig {
                filter: DEFAULT_FILTER.to_string(),
                format: LogFormat::Pretty,
            }
        );
    }

    #[test]
    fn test_rust_logとlog_formatの値を採用する() {
        let config = TracingConfig::from_values(Some("warn,kanban_api=trace"), Some("JSON"));

        assert_eq!(config.filter, "warn,kanban_api=trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_空のrust_logは既定のフィルタになる() {
        let config = TracingConfig::from_values(Some("  "), Some("json"));

        assert_eq!(config.filter, DEFAULT_FILTER);
    }

    #[test]
    fn test_json以外のlog_formatはprettyになる() {
        assert_eq!(LogFormat::from_value(Some("text")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(Some("")), LogFormat::Pretty);
    }
}

//! # トレーシング初期化
//!
//! バイナリの起動時に一度だけ [`init_tracing`] を呼ぶ。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `RUST_LOG` | `info,challengehub=debug` | ログレベルのフィルタ |
//! | `LOG_FORMAT` | `pretty` | `json` または `pretty` |

use std::str::FromStr;

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,challengehub=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// 1 行 1 イベントの JSON（ログ収集基盤向け）
   Json,
   #[default]
   Pretty,
}

impl FromStr for LogFormat {
   type Err = String;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s.trim() {
         "json" => Ok(Self::Json),
         "pretty" => Ok(Self::Pretty),
         other => Err(format!("unknown LOG_FORMAT={other:?}")),
      }
   }
}

/// トレーシング設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
   /// 起動ログに出すサービス名
   pub service_name: String,
   pub log_format:   LogFormat,
}

impl TracingConfig {
   /// `LOG_FORMAT` から出力形式を決める
   ///
   /// 不正な値は警告して `pretty` にする。subscriber 初期化前なので
   /// 警告は stderr に書く。
   pub fn from_env(service_name: impl Into<String>) -> Self {
      let log_format = match std::env::var("LOG_FORMAT") {
         Ok(value) => value.parse().unwrap_or_else(|e: String| {
            eprintln!("WARNING: {e}, falling back to pretty");
            LogFormat::Pretty
         }),
         Err(_) => LogFormat::default(),
      };
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }
}

/// グローバル subscriber を登録する
///
/// `tracing_error::ErrorLayer` を含めるので、`InfraError` が生成時点の
/// `SpanTrace` を取れる。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
   use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(filter)
      .with(fmt_layer)
      .with(tracing_error::ErrorLayer::default())
      .init();
}

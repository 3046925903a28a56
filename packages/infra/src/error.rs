//! # インフラ層エラー
//!
//! [`InfraError`] は種別（[`InfraErrorKind`]）と、生成時点の [`SpanTrace`] を持つ。
//! どのリポジトリメソッドの中で失敗したかは `span_trace()` を表示すれば分かる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// クエリ実行・接続の失敗
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// クライアント入力が原因の失敗（外部キー違反など）
   #[error("入力エラー: {0}")]
   InvalidInput(String),

   /// 行がドメインの制約を満たさない
   #[error("データ不整合: {0}")]
   Corrupted(String),
}

impl InfraError {
   fn new(kind: InfraErrorKind) -> Self {
      Self {
         kind,
         span_trace: SpanTrace::capture(),
      }
   }

   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   pub fn invalid_input(msg: impl Into<String>) -> Self {
      Self::new(InfraErrorKind::InvalidInput(msg.into()))
   }

   pub fn corrupted(msg: impl Into<String>) -> Self {
      Self::new(InfraErrorKind::Corrupted(msg.into()))
   }

   /// INSERT / UPDATE の失敗を分類する
   ///
   /// 存在確認の後に参照先ユーザーが消えると外部キー違反になる。
   /// これは入力エラーとして扱う。
   pub(crate) fn from_write(source: sqlx::Error, msg: impl Into<String>) -> Self {
      match source.as_database_error().map(|e| e.kind()) {
         Some(sqlx::error::ErrorKind::ForeignKeyViolation) => Self::invalid_input(msg),
         _ => source.into(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self::new(InfraErrorKind::Database(source))
   }
}

#[cfg(test)]
mod tests {
   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   #[test]
   fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("find_program", program_id = 1);
         let _enter = span.enter();

         let err: InfraError = sqlx::Error::RowNotFound.into();

         assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
         let trace_str = format!("{}", err.span_trace());
         assert!(
            trace_str.contains("find_program"),
            "SpanTrace がスパン名を含むこと: {trace_str}",
         );
      });
   }

   #[test]
   fn test_invalid_inputの種別とメッセージ() {
      let err = InfraError::invalid_input("user_id が存在しません");

      assert!(matches!(
         err.kind(),
         InfraErrorKind::InvalidInput(msg) if msg == "user_id が存在しません"
      ));
      assert_eq!(format!("{err}"), "入力エラー: user_id が存在しません");
   }

   #[test]
   fn test_from_writeはdb以外のエラーをdatabaseのまま返す() {
      let err = InfraError::from_write(sqlx::Error::PoolTimedOut, "unused");

      assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
   }

   #[test]
   fn test_sourceがinfra_error_kindに委譲する() {
      use std::error::Error;

      let err: InfraError = sqlx::Error::RowNotFound.into();

      assert!(err.source().is_some());
   }
}

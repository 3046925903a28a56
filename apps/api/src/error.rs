//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError
//!        ↓ From
//! ApiError（NotFound / Validation / Internal）
//!        ↓ during(Operation)
//! OperationError ──IntoResponse──▶ {message, error, code}
//! ```
//!
//! `message` には失敗した操作の要約（"Data not saved" など）、
//! `error` には原因、`code` には HTTP ステータスを入れる。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use challengehub_domain::DomainError;
use challengehub_infra::{InfraError, InfraErrorKind};
use challengehub_shared::ErrorResponse;
use thiserror::Error;

/// 失敗した操作
///
/// エラーレスポンスの `message` を決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
   List,
   Create,
   Show,
   Update,
   Delete,
}

impl Operation {
   pub fn failure_message(self) -> &'static str {
      match self {
         Operation::List => "Not listed",
         Operation::Create => "Data not saved",
         Operation::Show => "Not found",
         Operation::Update => "Not updated",
         Operation::Delete => "Not deleted",
      }
   }
}

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない（404 Not Found）
   #[error("{0}")]
   NotFound(String),

   /// バリデーションエラー（400 Bad Request）
   ///
   /// 不正なフィールド、未知のフィールド、不正な JSON・クエリ・パス、
   /// 存在しないユーザーへの参照。
   #[error("{0}")]
   Validation(String),

   /// 内部エラー（500 Internal Server Error）
   ///
   /// 詳細はログにのみ出力し、クライアントには返さない。
   #[error("内部エラー: {0}")]
   Internal(InfraError),
}

impl ApiError {
   /// 失敗した操作を付与する
   pub fn during(self, operation: Operation) -> OperationError {
      OperationError {
         operation,
         error: self,
      }
   }

   fn status(&self) -> StatusCode {
      match self {
         ApiError::NotFound(_) => StatusCode::NOT_FOUND,
         ApiError::Validation(_) => StatusCode::BAD_REQUEST,
         ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }

   fn into_response_with(self, message: &str) -> Response {
      let status = self.status();
      let body = match self {
         ApiError::NotFound(cause) | ApiError::Validation(cause) => {
            ErrorResponse::new(message, cause, status.as_u16())
         }
         ApiError::Internal(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "{message}: 内部エラー"
            );
            ErrorResponse::internal_error(message)
         }
      };
      (status, Json(body)).into_response()
   }
}

/// 操作名付きの API エラー
///
/// ハンドラの戻り値として使う。
#[derive(Debug, Error)]
#[error("{}: {error}", .operation.failure_message())]
pub struct OperationError {
   operation: Operation,
   #[source]
   error:     ApiError,
}

impl IntoResponse for OperationError {
   fn into_response(self) -> Response {
      self.error.into_response_with(self.operation.failure_message())
   }
}

/// 抽出器の `Rejection` として直接返る場合
///
/// ハンドラは抽出結果を `Result` で受けて [`ApiError::during`] を通すので、
/// 通常この経路は使われない。
impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      self.into_response_with("Invalid request")
   }
}

impl From<DomainError> for ApiError {
   fn from(e: DomainError) -> Self {
      match e {
         DomainError::Validation(msg) => ApiError::Validation(msg),
         e @ DomainError::NotFound { .. } => ApiError::NotFound(e.to_string()),
      }
   }
}

impl From<InfraError> for ApiError {
   fn from(e: InfraError) -> Self {
      match e.kind() {
         InfraErrorKind::InvalidInput(msg) => ApiError::Validation(msg.clone()),
         _ => ApiError::Internal(e),
      }
   }
}

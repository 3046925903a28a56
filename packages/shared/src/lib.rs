//! # ChallengeHub 共有ユーティリティ
//!
//! このクレートは、ChallengeHub
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（axum には依存しない）
//!
//! ## モジュール構成
//!
//! - [`api_response`] - `{ "data": T }` 形式のレスポンスエンベロープ
//! - [`paginated_response`] - ページ番号ベースのページネーション付きレスポンス
//! - [`error_response`] - `{ message, error, code }` 形式のエラーレスポンス
//! - [`message_response`] - `{ message }` 形式の完了通知
//! - [`health`] - ヘルスチェック・Readiness の共通型
//! - [`observability`] - トレーシング初期化

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod message_response;
pub mod observability;
pub mod paginated_response;

pub use api_response::ApiResponse;
pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use message_response::MessageResponse;
pub use paginated_response::{PageMeta, PaginatedResponse};

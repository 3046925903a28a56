//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各リソースのハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、検証と永続化はユースケースに委譲する
//! - リソースの整形（所有者のネスト、日時の RFC 3339 化）は DTO の `From` 実装で行う
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs            # 親モジュール（共通 DTO・re-export）
//! └── handler/
//!     ├── health.rs     # /health, /health/ready
//!     ├── program.rs    # /api/v1/programs
//!     └── challenge.rs  # /api/v1/challenges
//! ```

pub mod challenge;
pub mod health;
pub mod program;

pub use challenge::{
   ChallengeState,
   create_challenge,
   delete_challenge,
   get_challenge,
   list_challenges,
   update_challenge,
};
use challengehub_domain::{
   DomainError,
   pagination::{Page, PageRequest},
   user::User,
};
use challengehub_shared::{PageMeta, PaginatedResponse};
pub use health::{ReadinessState, health_check, readiness_check};
pub use program::{
   ProgramState,
   create_program,
   delete_program,
   get_program,
   list_programs,
   update_program,
};
use serde::{Deserialize, Deserializer, Serialize};

/// 一覧取得のクエリパラメータ
///
/// `items` は `per_page` でも受け付ける。
/// 未知のパラメータは無視する。
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
   pub page:  Option<u32>,
   #[serde(alias = "per_page")]
   pub items: Option<u32>,
}

impl ListQuery {
   pub fn to_page_request(&self) -> Result<PageRequest, DomainError> {
      PageRequest::new(self.page, self.items)
   }
}

/// リソースにネストするユーザーの要約
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummaryDto {
   pub id:    i64,
   pub name:  String,
   pub email: String,
}

impl From<User> for UserSummaryDto {
   fn from(user: User) -> Self {
      Self {
         id:    user.id().value(),
         name:  user.name().to_string(),
         email: user.email().to_string(),
      }
   }
}

/// 更新リクエストの省略可能フィールド
///
/// `#[serde(default, deserialize_with = "present")]` と組み合わせる。
/// キーの省略は `None`（変更しない）、明示的な `null` はエラーになる。
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
   D: Deserializer<'de>,
   T: Deserialize<'de>,
{
   T::deserialize(deserializer).map(Some)
}

/// ページを `{data, meta}` 形式に変換する
pub(crate) fn paginated<T, D>(page: Page<T>, to_dto: impl FnMut(T) -> D) -> PaginatedResponse<D> {
   let meta = PageMeta {
      current_page: page.request().page(),
      per_page:     page.request().per_page(),
      total:        page.total(),
      last_page:    page.last_page(),
      from:         page.first_position(),
      to:           page.last_position(),
   };
   PaginatedResponse::new(page.into_items().into_iter().map(to_dto).collect(), meta)
}

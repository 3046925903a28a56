//! # ユースケース層
//!
//! Program / Challenge の CRUD を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと Clock を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: 入力の検証・存在確認・所有者の解決はユースケースに集約
//! - **NotFound の統一**: 取得・更新・削除のいずれも、存在しない ID は 404

pub(crate) mod helpers;

pub mod challenge;
pub mod program;

use challengehub_domain::user::User;
pub use challenge::{ChallengeUseCaseImpl, CreateChallengeInput, UpdateChallengeInput};
pub use program::{CreateProgramInput, ProgramUseCaseImpl, UpdateProgramInput};

/// レコードと、その所有者（登録者）のユーザー
///
/// ユーザー行が読み取りの合間に削除された場合のみ `owner` は `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithOwner<T> {
   pub record: T,
   pub owner:  Option<User>,
}

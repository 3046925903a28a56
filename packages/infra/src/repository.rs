//! # リポジトリ
//!
//! エンティティの永続化を担当するリポジトリトレイトと PostgreSQL 実装。
//!
//! ## 設計方針
//!
//! - トレイトは `Send + Sync` を要求し、ユースケースには `Arc<dyn Trait>` で注入する
//! - 「存在しない」は `Option` / `bool` で返し、エラーにはしない
//!   （NotFound への変換はユースケース層の責務）
//! - SQL は実行時に組み立てる `sqlx::query_as` を使い、行は `FromRow` で受ける

pub mod challenge_repository;
pub mod program_repository;
pub mod user_repository;

pub use challenge_repository::{ChallengeRepository, PostgresChallengeRepository};
pub use program_repository::{PostgresProgramRepository, ProgramRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};

//! # ChallengeHub インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: ユースケース層が依存するリポジトリトレイトと、その PostgreSQL 実装
//! - **テスト用リポジトリ**: `test-utils` feature で有効になるインメモリ実装
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ定義と実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use challengehub_infra::{db, repository::PostgresProgramRepository};
//!
//! let pool = db::create_pool("postgres://localhost/challengehub", 10).await?;
//! db::run_migrations(&pool).await?;
//! let programs = PostgresProgramRepository::new(pool.clone());
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};

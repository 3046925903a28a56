//! # ChallengeHub ドメイン層
//!
//! プログラム（Program）とチャレンジ（Challenge）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（Program, Challenge, User）
//! - **値オブジェクト**: バリデーション済みの不変値（Title, Description, Difficulty）
//! - **ドメインエラー**: 入力値の検証失敗やエンティティ不在を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use challengehub_domain::{DomainError, value_objects::Title};
//!
//! let title = Title::new("  二分探索  ").unwrap();
//! assert_eq!(title.as_str(), "二分探索");
//!
//! assert!(matches!(Title::new(""), Err(DomainError::Validation(_))));
//! ```

#[macro_use]
mod macros;

pub mod challenge;
pub mod clock;
pub mod error;
pub mod pagination;
pub mod program;
pub mod user;
pub mod value_objects;

pub use error::DomainError;

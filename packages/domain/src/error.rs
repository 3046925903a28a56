//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗やエンティティ不在を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! 取得・更新・削除のいずれでも、存在しない ID は一律 `NotFound` とする。
//!
//! ## 使用例
//!
//! ```rust
//! use challengehub_domain::DomainError;
//!
//! let error = DomainError::NotFound {
//!    entity_type: "Challenge",
//!    id:          "1500".to_string(),
//! };
//! assert_eq!(error.to_string(), "Challenge(id=1500) が見つかりません");
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// - 必須フィールドが未入力
   /// - 文字数制限・値域の超過
   /// - 存在しないユーザーへの参照
   #[error("{0}")]
   Validation(String),

   /// エンティティが見つからない
   #[error("{entity_type}(id={id}) が見つかりません")]
   NotFound {
      /// エンティティの種類（"Program", "Challenge" など）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}

impl DomainError {
   /// `NotFound` を組み立てるヘルパー
   pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
      Self::NotFound {
         entity_type,
         id: id.to_string(),
      }
   }
}

//! # メッセージレスポンス
//!
//! 削除完了など、返すリソースがない操作の `{ "message": "..." }` 形式。

use serde::{Deserialize, Serialize};

/// 削除成功時のメッセージ
pub const DELETED_SUCCESSFULLY: &str = "Deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
   pub message: String,
}

impl MessageResponse {
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }

   /// `{ "message": "Deleted successfully" }`
   pub fn deleted() -> Self {
      Self::new(DELETED_SUCCESSFULLY)
   }
}

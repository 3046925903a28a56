//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）
//! - `code` には常に HTTP ステータスコードを入れる
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "message": "Not found",
//!   "error": "Challenge(id=1500) が見つかりません",
//!   "code": 404
//! }
//! ```

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// - `message`: 操作単位の要約（例: `"Data not saved"`）
/// - `error`: 原因の説明（内部エラーでは固定文言）
/// - `code`: HTTP ステータスコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub message: String,
   pub error:   String,
   pub code:    u16,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(message: impl Into<String>, error: impl Into<String>, code: u16) -> Self {
      Self {
         message: message.into(),
         error: error.into(),
         code,
      }
   }

   /// 500 Internal Server Error
   ///
   /// error は固定値（内部情報を漏らさないため）。
   pub fn internal_error(message: impl Into<String>) -> Self {
      Self::new(message, "内部エラーが発生しました", 500)
   }
}

//! # データエンベロープ
//!
//! 作成・取得・更新のレスポンスは、整形済みリソースを `data` キーに包んで返す。
//!
//! ```
//! use challengehub_shared::ApiResponse;
//!
//! let body = serde_json::to_string(&ApiResponse::new(42)).unwrap();
//! assert_eq!(body, r#"{"data":42}"#);
//! ```

use serde::{Deserialize, Serialize};

/// `{ "data": T }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
   pub data: T,
}

impl<T> ApiResponse<T> {
   pub fn new(data: T) -> Self {
      Self { data }
   }
}

impl<T> From<T> for ApiResponse<T> {
   fn from(data: T) -> Self {
      Self::new(data)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use super::*;

   #[derive(Debug, PartialEq, Serialize, Deserialize)]
   struct Resource {
      id:    i64,
      title: String,
   }

   #[test]
   fn test_リソースはdataキーの下にネストされる() {
      let response = ApiResponse::from(Resource {
         id:    1,
         title: "Test".to_string(),
      });

      assert_eq!(
         serde_json::to_value(&response).unwrap(),
         json!({ "data": { "id": 1, "title": "Test" } })
      );
   }

   #[test]
   fn test_レスポンスボディからリソースを取り出せる() {
      let response: ApiResponse<Resource> =
         serde_json::from_str(r#"{"data":{"id":7,"title":"Loop"}}"#).unwrap();

      assert_eq!(response.data.id, 7);
      assert_eq!(response.data.title, "Loop");
   }
}

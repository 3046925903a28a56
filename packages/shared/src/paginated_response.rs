//! # ページネーション付きレスポンス
//!
//! ページ番号ベースのページネーションに対応した API レスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーションのメタ情報
///
/// `from` / `to` はページ内の先頭・末尾要素の通し番号（1 始まり）。
/// ページが空の場合はどちらも `None`（JSON では `null`）になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
   pub current_page: u32,
   pub per_page:     u32,
   pub total:        u64,
   pub last_page:    u32,
   pub from:         Option<u64>,
   pub to:           Option<u64>,
}

/// ページネーション付きレスポンス
///
/// `ApiResponse<T>` が単一データ用であるのに対し、
/// `PaginatedResponse<T>` はリスト + メタ情報の形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "meta": {
///     "current_page": 1,
///     "per_page": 10,
///     "total": 42,
///     "last_page": 5,
///     "from": 1,
///     "to": 10
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
   pub data: Vec<T>,
   pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
   /// データとメタ情報から作成する
   pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
      Self { data, meta }
   }
}

//! # ページネーション
//!
//! 一覧取得のページ指定（[`PageRequest`]）と結果（[`Page`]）。
//!
//! ページ番号は 1 始まり。範囲外のページを指定した場合はエラーにせず、
//! 空のページを返す。

use crate::DomainError;

/// ページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
   page:     u32,
   per_page: u32,
}

impl PageRequest {
   /// 1 ページあたりの件数のデフォルト
   pub const DEFAULT_PER_PAGE: u32 = 10;
   /// 1 ページあたりの件数の上限
   pub const MAX_PER_PAGE: u32 = 100;

   /// クエリパラメータからページ指定を作成する
   ///
   /// 未指定の場合は 1 ページ目・10 件になる。
   pub fn new(page: Option<u32>, per_page: Option<u32>) -> Result<Self, DomainError> {
      let page = page.unwrap_or(1);
      if page == 0 {
         return Err(DomainError::Validation(
            "page は 1 以上である必要があります".to_string(),
         ));
      }

      let per_page = per_page.unwrap_or(Self::DEFAULT_PER_PAGE);
      if per_page == 0 || per_page > Self::MAX_PER_PAGE {
         return Err(DomainError::Validation(format!(
            "items は 1 以上 {} 以下である必要があります",
            Self::MAX_PER_PAGE
         )));
      }

      Ok(Self { page, per_page })
   }

   pub fn page(&self) -> u32 {
      self.page
   }

   pub fn per_page(&self) -> u32 {
      self.per_page
   }

   /// SQL の `LIMIT`
   pub fn limit(&self) -> i64 {
      i64::from(self.per_page)
   }

   /// SQL の `OFFSET`
   pub fn offset(&self) -> i64 {
      (i64::from(self.page) - 1) * i64::from(self.per_page)
   }
}

impl Default for PageRequest {
   fn default() -> Self {
      Self {
         page:     1,
         per_page: Self::DEFAULT_PER_PAGE,
      }
   }
}

/// ページ単位の取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
   items:   Vec<T>,
   total:   u64,
   request: PageRequest,
}

impl<T> Page<T> {
   pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
      Self {
         items,
         total,
         request,
      }
   }

   pub fn items(&self) -> &[T] {
      &self.items
   }

   pub fn into_items(self) -> Vec<T> {
      self.items
   }

   pub fn total(&self) -> u64 {
      self.total
   }

   pub fn request(&self) -> PageRequest {
      self.request
   }

   /// 最終ページ番号（0 件でも 1）
   pub fn last_page(&self) -> u32 {
      let per_page = u64::from(self.request.per_page);
      let pages = self.total.div_ceil(per_page).max(1);
      u32::try_from(pages).unwrap_or(u32::MAX)
   }

   /// ページ内先頭要素の通し番号（1 始まり）。空ページでは `None`
   pub fn first_position(&self) -> Option<u64> {
      if self.items.is_empty() {
         return None;
      }
      Some(self.offset() + 1)
   }

   /// ページ内末尾要素の通し番号（1 始まり）。空ページでは `None`
   pub fn last_position(&self) -> Option<u64> {
      if self.items.is_empty() {
         return None;
      }
      Some(self.offset() + self.items.len() as u64)
   }

   /// 要素を変換する（メタ情報は維持）
   pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
      Page {
         items:   self.items.into_iter().map(f).collect(),
         total:   self.total,
         request: self.request,
      }
   }

   fn offset(&self) -> u64 {
      (u64::from(self.request.page) - 1) * u64::from(self.request.per_page)
   }
}

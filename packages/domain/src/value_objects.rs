//! # 値オブジェクト
//!
//! Program / Challenge で共有するバリデーション済みの値。

use serde::{Deserialize, Serialize};

use crate::DomainError;

define_validated_string! {
   /// タイトル（値オブジェクト）
   ///
   /// 前後の空白を除去したうえで 1〜255 文字。
   pub struct Title {
      label: "title",
      max_length: 255,
   }
}

define_validated_string! {
   /// 説明文（値オブジェクト）
   ///
   /// 前後の空白を除去したうえで 1〜5000 文字。
   pub struct Description {
      label: "description",
      max_length: 5000,
   }
}

/// チャレンジの難易度（1〜5）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(i16);

impl Difficulty {
   pub const MIN: i16 = 1;
   pub const MAX: i16 = 5;

   /// 値域チェック付きで作成する
   ///
   /// JSON の数値はそのまま `i64` で受け取り、ここで範囲外を弾く。
   pub fn new(value: i64) -> Result<Self, DomainError> {
      i16::try_from(value)
         .ok()
         .filter(|v| (Self::MIN..=Self::MAX).contains(v))
         .map(Self)
         .ok_or_else(|| {
            DomainError::Validation(format!(
               "difficulty は {} 以上 {} 以下である必要があります",
               Self::MIN,
               Self::MAX
            ))
         })
   }

   pub fn value(&self) -> i16 {
      self.0
   }
}

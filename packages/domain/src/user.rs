//! # ユーザー
//!
//! Program の所有者、Challenge の登録者となるユーザー。
//! この API ではユーザーを作成・更新せず、参照（存在確認と要約表示）のみ行う。

use serde::{Deserialize, Serialize};

define_serial_id! {
   /// ユーザー ID
   pub struct UserId;
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
   id:    UserId,
   name:  String,
   email: String,
}

impl User {
   /// データベースから復元する
   pub fn from_db(id: UserId, name: String, email: String) -> Self {
      Self { id, name, email }
   }

   pub fn id(&self) -> UserId {
      self.id
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn email(&self) -> &str {
      &self.email
   }
}

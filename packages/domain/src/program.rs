//! # プログラム
//!
//! ユーザーが所有する学習プログラム。
//!
//! ## ライフサイクル
//!
//! - POST で作成（ID はデータベースが採番）
//! - PUT で送信されたフィールドのみ上書き
//! - DELETE で物理削除

use chrono::{DateTime, Utc};

use crate::{
   user::UserId,
   value_objects::{Description, Title},
};

define_serial_id! {
   /// プログラム ID
   pub struct ProgramId;
}

/// 新規プログラム（ID 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProgram {
   pub title:       Title,
   pub description: Description,
   pub user_id:     UserId,
   pub now:         DateTime<Utc>,
}

/// プログラムの部分更新
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramChanges {
   pub title:       Option<Title>,
   pub description: Option<Description>,
   pub user_id:     Option<UserId>,
}

/// プログラムエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
   id:          ProgramId,
   title:       Title,
   description: Description,
   user_id:     UserId,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl Program {
   /// データベースから復元する
   pub fn from_db(
      id: ProgramId,
      title: Title,
      description: Description,
      user_id: UserId,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         title,
         description,
         user_id,
         created_at,
         updated_at,
      }
   }

   /// 採番済み ID を付与してエンティティにする
   pub fn from_new(id: ProgramId, new: NewProgram) -> Self {
      Self {
         id,
         title: new.title,
         description: new.description,
         user_id: new.user_id,
         created_at: new.now,
         updated_at: new.now,
      }
   }

   /// 部分更新を適用した新しい状態を返す
   pub fn apply(self, changes: ProgramChanges, now: DateTime<Utc>) -> Self {
      Self {
         title: changes.title.unwrap_or(self.title),
         description: changes.description.unwrap_or(self.description),
         user_id: changes.user_id.unwrap_or(self.user_id),
         updated_at: now,
         ..self
      }
   }

   pub fn id(&self) -> ProgramId {
      self.id
   }

   pub fn title(&self) -> &Title {
      &self.title
   }

   pub fn description(&self) -> &Description {
      &self.description
   }

   pub fn user_id(&self) -> UserId {
      self.user_id
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}

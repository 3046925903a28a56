//! # チャレンジ
//!
//! ユーザーが登録する課題。難易度（1〜5）を持つ。

use chrono::{DateTime, Utc};

use crate::{
   user::UserId,
   value_objects::{Description, Difficulty, Title},
};

define_serial_id! {
   /// チャレンジ ID
   pub struct ChallengeId;
}

/// 新規チャレンジ（ID 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChallenge {
   pub title:       Title,
   pub description: Description,
   pub difficulty:  Difficulty,
   pub user_id:     UserId,
   pub now:         DateTime<Utc>,
}

/// チャレンジの部分更新
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeChanges {
   pub title:       Option<Title>,
   pub description: Option<Description>,
   pub difficulty:  Option<Difficulty>,
   pub user_id:     Option<UserId>,
}

/// チャレンジエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
   id:          ChallengeId,
   title:       Title,
   description: Description,
   difficulty:  Difficulty,
   user_id:     UserId,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl Challenge {
   /// データベースから復元する
   pub fn from_db(
      id: ChallengeId,
      title: Title,
      description: Description,
      difficulty: Difficulty,
      user_id: UserId,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         title,
         description,
         difficulty,
         user_id,
         created_at,
         updated_at,
      }
   }

   /// 採番済み ID を付与してエンティティにする
   pub fn from_new(id: ChallengeId, new: NewChallenge) -> Self {
      Self {
         id,
         title: new.title,
         description: new.description,
         difficulty: new.difficulty,
         user_id: new.user_id,
         created_at: new.now,
         updated_at: new.now,
      }
   }

   /// 部分更新を適用した新しい状態を返す
   pub fn apply(self, changes: ChallengeChanges, now: DateTime<Utc>) -> Self {
      Self {
         title: changes.title.unwrap_or(self.title),
         description: changes.description.unwrap_or(self.description),
         difficulty: changes.difficulty.unwrap_or(self.difficulty),
         user_id: changes.user_id.unwrap_or(self.user_id),
         updated_at: now,
         ..self
      }
   }

   pub fn id(&self) -> ChallengeId {
      self.id
   }

   pub fn title(&self) -> &Title {
      &self.title
   }

   pub fn description(&self) -> &Description {
      &self.description
   }

   pub fn difficulty(&self) -> Difficulty {
      self.difficulty
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

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_applyで難易度と登録者を変更できる() {
      let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
      let challenge = Challenge::from_new(
         ChallengeId::new(10),
         NewChallenge {
            title:       Title::new("Test").unwrap(),
            description: Description::new("Test").unwrap(),
            difficulty:  Difficulty::new(1).unwrap(),
            user_id:     UserId::new(1),
            now,
         },
      );

      let updated = challenge.apply(
         ChallengeChanges {
            difficulty: Some(Difficulty::new(4).unwrap()),
            user_id: Some(UserId::new(2)),
            ..Default::default()
         },
         now,
      );

      assert_eq!(updated.id(), ChallengeId::new(10));
      assert_eq!(updated.title().as_str(), "Test");
      assert_eq!(updated.difficulty().value(), 4);
      assert_eq!(updated.user_id(), UserId::new(2));
   }
}

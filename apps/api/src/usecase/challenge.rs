//! チャレンジ管理ユースケース
//!
//! 流れは [`super::program`] と同じで、難易度（1〜5）の検証が加わる。

use std::sync::Arc;

use challengehub_domain::{
   DomainError,
   challenge::{Challenge, ChallengeChanges, ChallengeId, NewChallenge},
   clock::Clock,
   pagination::{Page, PageRequest},
   user::UserId,
   value_objects::{Description, Difficulty, Title},
};
use challengehub_infra::repository::{ChallengeRepository, UserRepository};

use super::{
   WithOwner,
   helpers::{FindResultExt, ensure_user_exists, resolve_users},
};
use crate::error::ApiError;

const ENTITY: &str = "Challenge";

/// チャレンジ作成の入力
#[derive(Debug, Clone)]
pub struct CreateChallengeInput {
   pub title:       String,
   pub description: String,
   pub difficulty:  i64,
   pub user_id:     i64,
}

/// チャレンジ更新の入力
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default)]
pub struct UpdateChallengeInput {
   pub title:       Option<String>,
   pub description: Option<String>,
   pub difficulty:  Option<i64>,
   pub user_id:     Option<i64>,
}

/// チャレンジ管理ユースケース
pub struct ChallengeUseCaseImpl {
   challenge_repository: Arc<dyn ChallengeRepository>,
   user_repository:      Arc<dyn UserRepository>,
   clock:                Arc<dyn Clock>,
}

impl ChallengeUseCaseImpl {
   pub fn new(
      challenge_repository: Arc<dyn ChallengeRepository>,
      user_repository: Arc<dyn UserRepository>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         challenge_repository,
         user_repository,
         clock,
      }
   }

   pub async fn list_challenges(
      &self,
      request: PageRequest,
   ) -> Result<Page<WithOwner<Challenge>>, ApiError> {
      let page = self.challenge_repository.find_page(request).await?;
      let users = resolve_users(
         self.user_repository.as_ref(),
         page.items().iter().map(Challenge::user_id),
      )
      .await?;

      Ok(page.map(|challenge| WithOwner {
         owner:  users.get(&challenge.user_id()).cloned(),
         record: challenge,
      }))
   }

   pub async fn create_challenge(
      &self,
      input: CreateChallengeInput,
   ) -> Result<WithOwner<Challenge>, ApiError> {
      let title = Title::new(input.title)?;
      let description = Description::new(input.description)?;
      let difficulty = Difficulty::new(input.difficulty)?;
      let reporter =
         ensure_user_exists(self.user_repository.as_ref(), UserId::new(input.user_id)).await?;

      let challenge = self
         .challenge_repository
         .insert(&NewChallenge {
            title,
            description,
            difficulty,
            user_id: reporter.id(),
            now: self.clock.now(),
         })
         .await?;

      Ok(WithOwner {
         record: challenge,
         owner:  Some(reporter),
      })
   }

   pub async fn get_challenge(&self, id: ChallengeId) -> Result<WithOwner<Challenge>, ApiError> {
      let challenge = self
         .challenge_repository
         .find_by_id(id)
         .await
         .or_not_found(ENTITY, id)?;
      let owner = self.user_repository.find_by_id(challenge.user_id()).await?;

      Ok(WithOwner {
         record: challenge,
         owner,
      })
   }

   pub async fn update_challenge(
      &self,
      id: ChallengeId,
      input: UpdateChallengeInput,
   ) -> Result<WithOwner<Challenge>, ApiError> {
      let challenge = self
         .challenge_repository
         .find_by_id(id)
         .await
         .or_not_found(ENTITY, id)?;

      let changes = ChallengeChanges {
         title:       input.title.map(Title::new).transpose()?,
         description: input.description.map(Description::new).transpose()?,
         difficulty:  input.difficulty.map(Difficulty::new).transpose()?,
         user_id:     input.user_id.map(UserId::new),
      };
      if let Some(user_id) = changes.user_id {
         ensure_user_exists(self.user_repository.as_ref(), user_id).await?;
      }

      let challenge = challenge.apply(changes, self.clock.now());
      if !self.challenge_repository.update(&challenge).await? {
         return Err(DomainError::not_found(ENTITY, id).into());
      }
      let owner = self.user_repository.find_by_id(challenge.user_id()).await?;

      Ok(WithOwner {
         record: challenge,
         owner,
      })
   }

   pub async fn delete_challenge(&self, id: ChallengeId) -> Result<(), ApiError> {
      if !self.challenge_repository.delete(id).await? {
         return Err(DomainError::not_found(ENTITY, id).into());
      }
      Ok(())
   }
}

//! プログラム管理ユースケース

use std::sync::Arc;

use challengehub_domain::{
   DomainError,
   clock::Clock,
   pagination::{Page, PageRequest},
   program::{NewProgram, Program, ProgramChanges, ProgramId},
   user::UserId,
   value_objects::{Description, Title},
};
use challengehub_infra::repository::{ProgramRepository, UserRepository};

use super::{
   WithOwner,
   helpers::{FindResultExt, ensure_user_exists, resolve_users},
};
use crate::error::ApiError;

const ENTITY: &str = "Program";

/// プログラム作成の入力
#[derive(Debug, Clone)]
pub struct CreateProgramInput {
   pub title:       String,
   pub description: String,
   pub user_id:     i64,
}

/// プログラム更新の入力
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default)]
pub struct UpdateProgramInput {
   pub title:       Option<String>,
   pub description: Option<String>,
   pub user_id:     Option<i64>,
}

/// プログラム管理ユースケース
pub struct ProgramUseCaseImpl {
   program_repository: Arc<dyn ProgramRepository>,
   user_repository:    Arc<dyn UserRepository>,
   clock:              Arc<dyn Clock>,
}

impl ProgramUseCaseImpl {
   pub fn new(
      program_repository: Arc<dyn ProgramRepository>,
      user_repository: Arc<dyn UserRepository>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         program_repository,
         user_repository,
         clock,
      }
   }

   /// プログラム一覧を ID 昇順で取得する
   pub async fn list_programs(
      &self,
      request: PageRequest,
   ) -> Result<Page<WithOwner<Program>>, ApiError> {
      let page = self.program_repository.find_page(request).await?;
      let users = resolve_users(
         self.user_repository.as_ref(),
         page.items().iter().map(Program::user_id),
      )
      .await?;

      Ok(page.map(|program| WithOwner {
         owner:  users.get(&program.user_id()).cloned(),
         record: program,
      }))
   }

   /// プログラムを作成する
   ///
   /// 1. タイトル・説明のバリデーション
   /// 2. 所有者ユーザーの存在確認
   /// 3. 挿入（ID はデータベースが採番）
   pub async fn create_program(
      &self,
      input: CreateProgramInput,
   ) -> Result<WithOwner<Program>, ApiError> {
      let title = Title::new(input.title)?;
      let description = Description::new(input.description)?;
      let owner =
         ensure_user_exists(self.user_repository.as_ref(), UserId::new(input.user_id)).await?;

      let program = self
         .program_repository
         .insert(&NewProgram {
            title,
            description,
            user_id: owner.id(),
            now: self.clock.now(),
         })
         .await?;

      Ok(WithOwner {
         record: program,
         owner:  Some(owner),
      })
   }

   /// プログラムを取得する
   pub async fn get_program(&self, id: ProgramId) -> Result<WithOwner<Program>, ApiError> {
      let program = self
         .program_repository
         .find_by_id(id)
         .await
         .or_not_found(ENTITY, id)?;
      let owner = self.user_repository.find_by_id(program.user_id()).await?;

      Ok(WithOwner {
         record: program,
         owner,
      })
   }

   /// プログラムを更新する
   ///
   /// 送信されたフィールドのみ検証して上書きし、`updated_at` を進める。
   pub async fn update_program(
      &self,
      id: ProgramId,
      input: UpdateProgramInput,
   ) -> Result<WithOwner<Program>, ApiError> {
      let program = self
         .program_repository
         .find_by_id(id)
         .await
         .or_not_found(ENTITY, id)?;

      let changes = ProgramChanges {
         title:       input.title.map(Title::new).transpose()?,
         description: input.description.map(Description::new).transpose()?,
         user_id:     input.user_id.map(UserId::new),
      };
      if let Some(user_id) = changes.user_id {
         ensure_user_exists(self.user_repository.as_ref(), user_id).await?;
      }

      let program = program.apply(changes, self.clock.now());
      if !self.program_repository.update(&program).await? {
         // 取得から更新までの間に削除された
         return Err(DomainError::not_found(ENTITY, id).into());
      }
      let owner = self.user_repository.find_by_id(program.user_id()).await?;

      Ok(WithOwner {
         record: program,
         owner,
      })
   }

   /// プログラムを削除する
   pub async fn delete_program(&self, id: ProgramId) -> Result<(), ApiError> {
      let deleted = self.program_repository.delete(id).await?;
      if !deleted {
         return Err(DomainError::not_found(ENTITY, id).into());
      }
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use challengehub_domain::{clock::FixedClock, user::User};
   use challengehub_infra::mock::{MockProgramRepository, MockUserRepository};
   use chrono::{DateTime, Utc};
   use pretty_assertions::assert_eq;

   use super::*;

   fn fixed_now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   fn sut_with(programs: MockProgramRepository, now: DateTime<Utc>) -> ProgramUseCaseImpl {
      let users = MockUserRepository::new();
      users.add_user(User::from_db(
         UserId::new(1),
         "Alice".to_string(),
         "alice@example.com".to_string(),
      ));
      users.add_user(User::from_db(
         UserId::new(2),
         "Bob".to_string(),
         "bob@example.com".to_string(),
      ));
      ProgramUseCaseImpl::new(
         Arc::new(programs),
         Arc::new(users),
         Arc::new(FixedClock::new(now)),
      )
   }

   fn sut() -> ProgramUseCaseImpl {
      sut_with(MockProgramRepository::new(), fixed_now())
   }

   fn create_input(title: &str) -> CreateProgramInput {
      CreateProgramInput {
         title:       title.to_string(),
         description: "Test".to_string(),
         user_id:     1,
      }
   }

   #[tokio::test]
   async fn test_作成したプログラムを取得できる() {
      // Arrange
      let sut = sut();

      // Act
      let created = sut.create_program(create_input("Test")).await.unwrap();
      let found = sut.get_program(created.record.id()).await.unwrap();

      // Assert
      assert_eq!(found, created);
      assert_eq!(found.record.title().as_str(), "Test");
      assert_eq!(found.owner.unwrap().name(), "Alice");
   }

   #[tokio::test]
   async fn test_タイトルが空なら作成されない() {
      let programs = MockProgramRepository::new();
      let sut = sut_with(programs.clone(), fixed_now());

      let result = sut.create_program(create_input("  ")).await;

      assert!(matches!(result, Err(ApiError::Validation(_))));
      assert!(programs.is_empty());
   }

   #[tokio::test]
   async fn test_存在しないユーザーでは作成できない() {
      let programs = MockProgramRepository::new();
      let sut = sut_with(programs.clone(), fixed_now());

      let result = sut
         .create_program(CreateProgramInput {
            user_id: 99,
            ..create_input("Test")
         })
         .await;

      assert!(matches!(result, Err(ApiError::Validation(_))));
      assert!(programs.is_empty());
   }

   #[tokio::test]
   async fn test_存在しないidの取得はnot_found() {
      let result = sut().get_program(ProgramId::new(1500)).await;

      assert!(matches!(result, Err(ApiError::NotFound(_))));
   }

   #[tokio::test]
   async fn test_更新は送信されたフィールドのみ上書きする() {
      // Arrange
      let programs = MockProgramRepository::new();
      let created = sut_with(programs.clone(), fixed_now())
         .create_program(create_input("Before"))
         .await
         .unwrap();
      let later = fixed_now() + chrono::Duration::minutes(5);
      let sut = sut_with(programs, later);

      // Act
      let updated = sut
         .update_program(
            created.record.id(),
            UpdateProgramInput {
               title: Some("After".to_string()),
               user_id: Some(2),
               ..Default::default()
            },
         )
         .await
         .unwrap();

      // Assert
      assert_eq!(updated.record.title().as_str(), "After");
      assert_eq!(updated.record.description().as_str(), "Test");
      assert_eq!(updated.record.created_at(), fixed_now());
      assert_eq!(updated.record.updated_at(), later);
      assert_eq!(updated.owner.unwrap().name(), "Bob");
   }

   #[tokio::test]
   async fn test_存在しないidの更新と削除はnot_found() {
      let sut = sut();

      let updated = sut
         .update_program(ProgramId::new(1500), UpdateProgramInput::default())
         .await;
      let deleted = sut.delete_program(ProgramId::new(1500)).await;

      assert!(matches!(updated, Err(ApiError::NotFound(_))));
      assert!(matches!(deleted, Err(ApiError::NotFound(_))));
   }

   #[tokio::test]
   async fn test_削除後の取得はnot_found() {
      let sut = sut();
      let created = sut.create_program(create_input("Test")).await.unwrap();

      sut.delete_program(created.record.id()).await.unwrap();
      let result = sut.get_program(created.record.id()).await;

      assert!(matches!(result, Err(ApiError::NotFound(_))));
   }

   #[tokio::test]
   async fn test_一覧は所有者を解決してページ単位で返す() {
      let sut = sut();
      for i in 0..12 {
         sut.create_program(create_input(&format!("Program {i}")))
            .await
            .unwrap();
      }

      let page = sut.list_programs(PageRequest::default()).await.unwrap();

      assert_eq!(page.items().len(), 10);
      assert_eq!(page.total(), 12);
      assert!(page.items().iter().all(|p| p.owner.is_some()));
   }
}

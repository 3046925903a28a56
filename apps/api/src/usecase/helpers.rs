//! ユースケース層の共通ヘルパー
//!
//! リポジトリ呼び出し結果の変換やユーザー参照の解決など、
//! Program と Challenge で繰り返されるパターンを共通化する。

use std::collections::HashMap;

use challengehub_domain::{
   DomainError,
   user::{User, UserId},
};
use challengehub_infra::{InfraError, repository::UserRepository};

use crate::error::ApiError;

/// リポジトリの `Result<Option<T>, InfraError>` を `Result<T, ApiError>` に変換する
///
/// ```ignore
/// let program = self.program_repository.find_by_id(id).await
///     .or_not_found("Program", id)?;
/// ```
pub(crate) trait FindResultExt<T> {
   /// `None` の場合は `ApiError::NotFound`、`InfraError` の場合は `ApiError` に変換して返す
   fn or_not_found(self, entity_type: &'static str, id: impl ToString) -> Result<T, ApiError>;
}

impl<T> FindResultExt<T> for Result<Option<T>, InfraError> {
   fn or_not_found(self, entity_type: &'static str, id: impl ToString) -> Result<T, ApiError> {
      self?
         .ok_or_else(|| DomainError::not_found(entity_type, id).into())
   }
}

/// 参照先のユーザーが存在することを確認する
///
/// 存在しない場合は入力の誤りとして `ApiError::Validation` を返す。
pub(crate) async fn ensure_user_exists(
   user_repository: &dyn UserRepository,
   user_id: UserId,
) -> Result<User, ApiError> {
   user_repository
      .find_by_id(user_id)
      .await?
      .ok_or_else(|| ApiError::Validation(format!("user_id={user_id} のユーザーが存在しません")))
}

/// ユーザー ID のリストからユーザーを一括解決する
///
/// 重複した ID は 1 回だけ問い合わせる。
pub(crate) async fn resolve_users(
   user_repository: &dyn UserRepository,
   user_ids: impl IntoIterator<Item = UserId>,
) -> Result<HashMap<UserId, User>, ApiError> {
   let mut ids: Vec<UserId> = user_ids.into_iter().collect();
   ids.sort_unstable();
   ids.dedup();
   if ids.is_empty() {
      return Ok(HashMap::new());
   }

   let users = user_repository.find_by_ids(&ids).await?;

   Ok(users.into_iter().map(|user| (user.id(), user)).collect())
}

#[cfg(test)]
mod tests {
   use challengehub_infra::mock::MockUserRepository;
   use pretty_assertions::assert_eq;

   use super::*;

   fn user(id: i64) -> User {
      User::from_db(UserId::new(id), format!("user{id}"), format!("user{id}@example.com"))
   }

   #[test]
   fn test_or_not_foundはnoneをnot_foundにする() {
      let result: Result<Option<i32>, InfraError> = Ok(None);

      let err = result.or_not_found("Program", 42).unwrap_err();

      assert!(matches!(err, ApiError::NotFound(msg) if msg == "Program(id=42) が見つかりません"));
   }

   #[test]
   fn test_or_not_foundはsomeをそのまま返す() {
      let result: Result<Option<i32>, InfraError> = Ok(Some(7));

      assert_eq!(result.or_not_found("Program", 1).unwrap(), 7);
   }

   #[tokio::test]
   async fn test_存在しないユーザーはバリデーションエラー() {
      let repo = MockUserRepository::new();

      let result = ensure_user_exists(&repo, UserId::new(9)).await;

      assert!(matches!(result, Err(ApiError::Validation(_))));
   }

   #[tokio::test]
   async fn test_resolve_usersは存在するユーザーのみを返す() {
      let repo = MockUserRepository::new();
      repo.add_user(user(1));
      repo.add_user(user(2));

      let users = resolve_users(&repo, [UserId::new(1), UserId::new(1), UserId::new(3)])
         .await
         .unwrap();

      assert_eq!(users.len(), 1);
      assert_eq!(users[&UserId::new(1)].name(), "user1");
   }
}

//! # UserRepository
//!
//! ユーザーの参照を担当するリポジトリ。
//! この API はユーザーを書き込まないため、参照系のメソッドのみを持つ。

use async_trait::async_trait;
use challengehub_domain::user::{User, UserId};
use sqlx::PgPool;

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
   /// ID でユーザーを検索する
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;

   /// 複数の ID でユーザーを一括検索する
   ///
   /// 存在しない ID は結果に含まれない。順序は保証しない。
   async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
   id:    i64,
   name:  String,
   email: String,
}

impl From<UserRow> for User {
   fn from(row: UserRow) -> Self {
      User::from_db(UserId::new(row.id), row.name, row.email)
   }
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
   pool: PgPool,
}

impl PostgresUserRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
      let row = sqlx::query_as::<_, UserRow>(
         r#"
         SELECT id, name, email
         FROM users
         WHERE id = $1
         "#,
      )
      .bind(id.value())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(User::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(count = ids.len()))]
   async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, InfraError> {
      if ids.is_empty() {
         return Ok(Vec::new());
      }

      let ids: Vec<i64> = ids.iter().map(UserId::value).collect();
      let rows = sqlx::query_as::<_, UserRow>(
         r#"
         SELECT id, name, email
         FROM users
         WHERE id = ANY($1)
         "#,
      )
      .bind(ids)
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(User::from).collect())
   }
}

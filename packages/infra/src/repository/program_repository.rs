//! # ProgramRepository
//!
//! プログラムの永続化を担当するリポジトリ。

use async_trait::async_trait;
use challengehub_domain::{
   pagination::{Page, PageRequest},
   program::{NewProgram, Program, ProgramId},
   user::UserId,
   value_objects::{Description, Title},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::InfraError;

/// プログラムリポジトリトレイト
#[async_trait]
pub trait ProgramRepository: Send + Sync {
   /// ID 昇順で 1 ページ分を取得する
   async fn find_page(&self, request: PageRequest) -> Result<Page<Program>, InfraError>;

   /// ID でプログラムを検索する
   async fn find_by_id(&self, id: ProgramId) -> Result<Option<Program>, InfraError>;

   /// プログラムを挿入し、採番された ID を付与したエンティティを返す
   async fn insert(&self, program: &NewProgram) -> Result<Program, InfraError>;

   /// プログラムを更新する
   ///
   /// 対象行が存在しなかった場合は `false` を返す。
   async fn update(&self, program: &Program) -> Result<bool, InfraError>;

   /// プログラムを削除する
   ///
   /// 対象行が存在しなかった場合は `false` を返す。
   async fn delete(&self, id: ProgramId) -> Result<bool, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct ProgramRow {
   id:          i64,
   title:       String,
   description: String,
   user_id:     i64,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl TryFrom<ProgramRow> for Program {
   type Error = InfraError;

   fn try_from(row: ProgramRow) -> Result<Self, Self::Error> {
      let corrupted = |e| InfraError::corrupted(format!("programs(id={}): {e}", row.id));
      Ok(Program::from_db(
         ProgramId::new(row.id),
         Title::new(row.title.clone()).map_err(corrupted)?,
         Description::new(row.description.clone()).map_err(corrupted)?,
         UserId::new(row.user_id),
         row.created_at,
         row.updated_at,
      ))
   }
}

/// PostgreSQL 実装の ProgramRepository
#[derive(Debug, Clone)]
pub struct PostgresProgramRepository {
   pool: PgPool,
}

impl PostgresProgramRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl ProgramRepository for PostgresProgramRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(page = request.page(), per_page = request.per_page()))]
   async fn find_page(&self, request: PageRequest) -> Result<Page<Program>, InfraError> {
      let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM programs")
         .fetch_one(&self.pool)
         .await?;

      let rows = sqlx::query_as::<_, ProgramRow>(
         r#"
         SELECT id, title, description, user_id, created_at, updated_at
         FROM programs
         ORDER BY id ASC
         LIMIT $1 OFFSET $2
         "#,
      )
      .bind(request.limit())
      .bind(request.offset())
      .fetch_all(&self.pool)
      .await?;

      let programs = rows
         .into_iter()
         .map(Program::try_from)
         .collect::<Result<Vec<_>, _>>()?;

      Ok(Page::new(
         programs,
         u64::try_from(total).unwrap_or_default(),
         request,
      ))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: ProgramId) -> Result<Option<Program>, InfraError> {
      let row = sqlx::query_as::<_, ProgramRow>(
         r#"
         SELECT id, title, description, user_id, created_at, updated_at
         FROM programs
         WHERE id = $1
         "#,
      )
      .bind(id.value())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Program::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(user_id = %program.user_id))]
   async fn insert(&self, program: &NewProgram) -> Result<Program, InfraError> {
      let id: i64 = sqlx::query_scalar(
         r#"
         INSERT INTO programs (title, description, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $4)
         RETURNING id
         "#,
      )
      .bind(program.title.as_str())
      .bind(program.description.as_str())
      .bind(program.user_id.value())
      .bind(program.now)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| InfraError::from_write(e, "user_id が存在しません"))?;

      Ok(Program::from_new(ProgramId::new(id), program.clone()))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %program.id()))]
   async fn update(&self, program: &Program) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
         UPDATE programs
         SET title = $2, description = $3, user_id = $4, updated_at = $5
         WHERE id = $1
         "#,
      )
      .bind(program.id().value())
      .bind(program.title().as_str())
      .bind(program.description().as_str())
      .bind(program.user_id().value())
      .bind(program.updated_at())
      .execute(&self.pool)
      .await
      .map_err(|e| InfraError::from_write(e, "user_id が存在しません"))?;

      Ok(result.rows_affected() > 0)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: ProgramId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
         DELETE FROM programs
         WHERE id = $1
         "#,
      )
      .bind(id.value())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}

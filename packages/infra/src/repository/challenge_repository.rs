//! # ChallengeRepository
//!
//! チャレンジの永続化を担当するリポジトリ。
//! 構造は [`ProgramRepository`](super::ProgramRepository) と同じで、`difficulty` 列を持つ。

use async_trait::async_trait;
use challengehub_domain::{
   challenge::{Challenge, ChallengeId, NewChallenge},
   pagination::{Page, PageRequest},
   user::UserId,
   value_objects::{Description, Difficulty, Title},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::InfraError;

/// チャレンジリポジトリトレイト
#[async_trait]
pub trait ChallengeRepository: Send + Sync {
   /// ID 昇順で 1 ページ分を取得する
   async fn find_page(&self, request: PageRequest) -> Result<Page<Challenge>, InfraError>;

   /// ID でチャレンジを検索する
   async fn find_by_id(&self, id: ChallengeId) -> Result<Option<Challenge>, InfraError>;

   /// チャレンジを挿入し、採番された ID を付与したエンティティを返す
   async fn insert(&self, challenge: &NewChallenge) -> Result<Challenge, InfraError>;

   /// チャレンジを更新する
   ///
   /// 対象行が存在しなかった場合は `false` を返す。
   async fn update(&self, challenge: &Challenge) -> Result<bool, InfraError>;

   /// チャレンジを削除する
   ///
   /// 対象行が存在しなかった場合は `false` を返す。
   async fn delete(&self, id: ChallengeId) -> Result<bool, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct ChallengeRow {
   id:          i64,
   title:       String,
   description: String,
   difficulty:  i16,
   user_id:     i64,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl TryFrom<ChallengeRow> for Challenge {
   type Error = InfraError;

   fn try_from(row: ChallengeRow) -> Result<Self, Self::Error> {
      let corrupted = |e| InfraError::corrupted(format!("challenges(id={}): {e}", row.id));
      Ok(Challenge::from_db(
         ChallengeId::new(row.id),
         Title::new(row.title.clone()).map_err(corrupted)?,
         Description::new(row.description.clone()).map_err(corrupted)?,
         Difficulty::new(i64::from(row.difficulty)).map_err(corrupted)?,
         UserId::new(row.user_id),
         row.created_at,
         row.updated_at,
      ))
   }
}

/// PostgreSQL 実装の ChallengeRepository
#[derive(Debug, Clone)]
pub struct PostgresChallengeRepository {
   pool: PgPool,
}

impl PostgresChallengeRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl ChallengeRepository for PostgresChallengeRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(page = request.page(), per_page = request.per_page()))]
   async fn find_page(&self, request: PageRequest) -> Result<Page<Challenge>, InfraError> {
      let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM challenges")
         .fetch_one(&self.pool)
         .await?;

      let rows = sqlx::query_as::<_, ChallengeRow>(
         r#"
         SELECT id, title, description, difficulty, user_id, created_at, updated_at
         FROM challenges
         ORDER BY id ASC
         LIMIT $1 OFFSET $2
         "#,
      )
      .bind(request.limit())
      .bind(request.offset())
      .fetch_all(&self.pool)
      .await?;

      let challenges = rows
         .into_iter()
         .map(Challenge::try_from)
         .collect::<Result<Vec<_>, _>>()?;

      Ok(Page::new(
         challenges,
         u64::try_from(total).unwrap_or_default(),
         request,
      ))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: ChallengeId) -> Result<Option<Challenge>, InfraError> {
      let row = sqlx::query_as::<_, ChallengeRow>(
         r#"
         SELECT id, title, description, difficulty, user_id, created_at, updated_at
         FROM challenges
         WHERE id = $1
         "#,
      )
      .bind(id.value())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Challenge::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(user_id = %challenge.user_id))]
   async fn insert(&self, challenge: &NewChallenge) -> Result<Challenge, InfraError> {
      let id: i64 = sqlx::query_scalar(
         r#"
         INSERT INTO challenges (title, description, difficulty, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $5)
         RETURNING id
         "#,
      )
      .bind(challenge.title.as_str())
      .bind(challenge.description.as_str())
      .bind(challenge.difficulty.value())
      .bind(challenge.user_id.value())
      .bind(challenge.now)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| InfraError::from_write(e, "user_id が存在しません"))?;

      Ok(Challenge::from_new(ChallengeId::new(id), challenge.clone()))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %challenge.id()))]
   async fn update(&self, challenge: &Challenge) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
         UPDATE challenges
         SET title = $2, description = $3, difficulty = $4, user_id = $5, updated_at = $6
         WHERE id = $1
         "#,
      )
      .bind(challenge.id().value())
      .bind(challenge.title().as_str())
      .bind(challenge.description().as_str())
      .bind(challenge.difficulty().value())
      .bind(challenge.user_id().value())
      .bind(challenge.updated_at())
      .execute(&self.pool)
      .await
      .map_err(|e| InfraError::from_write(e, "user_id が存在しません"))?;

      Ok(result.rows_affected() > 0)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: ChallengeId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
         DELETE FROM challenges
         WHERE id = $1
         "#,
      )
      .bind(id.value())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}

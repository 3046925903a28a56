//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するユーザー投入・エンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use challengehub_domain::{
   challenge::NewChallenge,
   program::NewProgram,
   user::UserId,
   value_objects::{Description, Difficulty, Title},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// ユーザーを 1 件投入し、採番された ID を返す
pub async fn insert_user(pool: &PgPool, name: &str, email: &str) -> UserId {
   let id: i64 = sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
      .bind(name)
      .bind(email)
      .fetch_one(pool)
      .await
      .unwrap();
   UserId::new(id)
}

/// デフォルト値で NewProgram を作成
pub fn new_program(title: &str, user_id: UserId) -> NewProgram {
   NewProgram {
      title: Title::new(title).unwrap(),
      description: Description::new("Test").unwrap(),
      user_id,
      now: test_now(),
   }
}

/// デフォルト値で NewChallenge を作成
pub fn new_challenge(title: &str, difficulty: i64, user_id: UserId) -> NewChallenge {
   NewChallenge {
      title: Title::new(title).unwrap(),
      description: Description::new("Test").unwrap(),
      difficulty: Difficulty::new(difficulty).unwrap(),
      user_id,
      now: test_now(),
   }
}

//! # ルーター構築
//!
//! 各ハンドラの State を受け取り、ルートを定義した [`Router`] を返す。
//! インフラ（プール・リポジトリ）の初期化は呼び出し側（`main`）で行う。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{
   ChallengeState,
   ProgramState,
   ReadinessState,
   create_challenge,
   create_program,
   delete_challenge,
   delete_program,
   get_challenge,
   get_program,
   health_check,
   list_challenges,
   list_programs,
   readiness_check,
   update_challenge,
   update_program,
};

/// ルーターを構築する
pub fn build_app(
   program_state: Arc<ProgramState>,
   challenge_state: Arc<ChallengeState>,
   readiness_state: Arc<ReadinessState>,
) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(readiness_state),
      )
      // プログラム API
      .merge(
         Router::new()
            .route("/api/v1/programs", get(list_programs).post(create_program))
            .route(
               "/api/v1/programs/{id}",
               get(get_program).put(update_program).delete(delete_program),
            )
            .with_state(program_state),
      )
      // チャレンジ API
      .merge(
         Router::new()
            .route(
               "/api/v1/challenges",
               get(list_challenges).post(create_challenge),
            )
            .route(
               "/api/v1/challenges/{id}",
               get(get_challenge)
                  .put(update_challenge)
                  .delete(delete_challenge),
            )
            .with_state(challenge_state),
      )
      .layer(TraceLayer::new_for_http())
}

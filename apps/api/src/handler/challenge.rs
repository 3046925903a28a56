//! # チャレンジハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/challenges` - 一覧（`?page=&items=`）
//! - `POST /api/v1/challenges` - 作成
//! - `GET /api/v1/challenges/{id}` - 取得
//! - `PUT /api/v1/challenges/{id}` - 更新（送信されたフィールドのみ）
//! - `DELETE /api/v1/challenges/{id}` - 削除

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use challengehub_domain::challenge::{Challenge, ChallengeId};
use challengehub_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};

use super::{ListQuery, UserSummaryDto, paginated, present};
use crate::{
   error::{ApiError, Operation, OperationError},
   extract::{ValidJson, ValidPath, ValidQuery},
   usecase::{ChallengeUseCaseImpl, CreateChallengeInput, UpdateChallengeInput, WithOwner},
};

/// チャレンジ API の共有状態
pub struct ChallengeState {
   pub usecase: ChallengeUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// チャレンジ作成リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateChallengeRequest {
   pub title:       String,
   pub description: String,
   pub difficulty:  i64,
   pub user_id:     i64,
}

/// チャレンジ更新リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateChallengeRequest {
   #[serde(default, deserialize_with = "present")]
   pub title:       Option<String>,
   #[serde(default, deserialize_with = "present")]
   pub description: Option<String>,
   #[serde(default, deserialize_with = "present")]
   pub difficulty:  Option<i64>,
   #[serde(default, deserialize_with = "present")]
   pub user_id:     Option<i64>,
}

/// チャレンジ DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChallengeDto {
   pub id:          i64,
   pub title:       String,
   pub description: String,
   pub difficulty:  i16,
   pub user:        Option<UserSummaryDto>,
   pub created_at:  String,
   pub updated_at:  String,
}

impl From<WithOwner<Challenge>> for ChallengeDto {
   fn from(WithOwner { record, owner }: WithOwner<Challenge>) -> Self {
      Self {
         id:          record.id().value(),
         title:       record.title().to_string(),
         description: record.description().to_string(),
         difficulty:  record.difficulty().value(),
         user:        owner.map(UserSummaryDto::from),
         created_at:  record.created_at().to_rfc3339(),
         updated_at:  record.updated_at().to_rfc3339(),
      }
   }
}

// --- ハンドラ ---

/// GET /api/v1/challenges
#[tracing::instrument(skip_all)]
pub async fn list_challenges(
   State(state): State<Arc<ChallengeState>>,
   query: Result<ValidQuery<ListQuery>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidQuery(query) = query.map_err(|e| e.during(Operation::List))?;

   let request = query
      .to_page_request()
      .map_err(|e| ApiError::from(e).during(Operation::List))?;

   let page = state
      .usecase
      .list_challenges(request)
      .await
      .map_err(|e| e.during(Operation::List))?;

   Ok(Json(paginated(page, ChallengeDto::from)))
}

/// POST /api/v1/challenges
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたチャレンジ
/// - `400 Bad Request`: バリデーションエラー（難易度の範囲外を含む）、存在しないユーザー
#[tracing::instrument(skip_all)]
pub async fn create_challenge(
   State(state): State<Arc<ChallengeState>>,
   req: Result<ValidJson<CreateChallengeRequest>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidJson(req) = req.map_err(|e| e.during(Operation::Create))?;

   let input = CreateChallengeInput {
      title:       req.title,
      description: req.description,
      difficulty:  req.difficulty,
      user_id:     req.user_id,
   };

   let challenge = state
      .usecase
      .create_challenge(input)
      .await
      .map_err(|e| e.during(Operation::Create))?;

   Ok((
      StatusCode::CREATED,
      Json(ApiResponse::new(ChallengeDto::from(challenge))),
   ))
}

/// GET /api/v1/challenges/{id}
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn get_challenge(
   State(state): State<Arc<ChallengeState>>,
   id: Result<ValidPath<i64>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidPath(id) = id.map_err(|e| e.during(Operation::Show))?;
   tracing::Span::current().record("id", id);

   let challenge = state
      .usecase
      .get_challenge(ChallengeId::new(id))
      .await
      .map_err(|e| e.during(Operation::Show))?;

   Ok(Json(ApiResponse::new(ChallengeDto::from(challenge))))
}

/// PUT /api/v1/challenges/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のチャレンジ
/// - `400 Bad Request`: バリデーションエラー（難易度の範囲外を含む）、存在しないユーザー
/// - `404 Not Found`: チャレンジが見つからない
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn update_challenge(
   State(state): State<Arc<ChallengeState>>,
   id: Result<ValidPath<i64>, ApiError>,
   req: Result<ValidJson<UpdateChallengeRequest>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidPath(id) = id.map_err(|e| e.during(Operation::Update))?;
   tracing::Span::current().record("id", id);
   let ValidJson(req) = req.map_err(|e| e.during(Operation::Update))?;

   let input = UpdateChallengeInput {
      title:       req.title,
      description: req.description,
      difficulty:  req.difficulty,
      user_id:     req.user_id,
   };

   let challenge = state
      .usecase
      .update_challenge(ChallengeId::new(id), input)
      .await
      .map_err(|e| e.during(Operation::Update))?;

   Ok(Json(ApiResponse::new(ChallengeDto::from(challenge))))
}

/// DELETE /api/v1/challenges/{id}
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn delete_challenge(
   State(state): State<Arc<ChallengeState>>,
   id: Result<ValidPath<i64>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidPath(id) = id.map_err(|e| e.during(Operation::Delete))?;
   tracing::Span::current().record("id", id);

   state
      .usecase
      .delete_challenge(ChallengeId::new(id))
      .await
      .map_err(|e| e.during(Operation::Delete))?;

   Ok(Json(MessageResponse::deleted()))
}

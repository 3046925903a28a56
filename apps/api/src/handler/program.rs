//! # プログラムハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/programs` - 一覧（`?page=&items=`）
//! - `POST /api/v1/programs` - 作成
//! - `GET /api/v1/programs/{id}` - 取得
//! - `PUT /api/v1/programs/{id}` - 更新（送信されたフィールドのみ）
//! - `DELETE /api/v1/programs/{id}` - 削除

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use challengehub_domain::program::{Program, ProgramId};
use challengehub_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};

use super::{ListQuery, UserSummaryDto, paginated, present};
use crate::{
   error::{ApiError, Operation, OperationError},
   extract::{ValidJson, ValidPath, ValidQuery},
   usecase::{CreateProgramInput, ProgramUseCaseImpl, UpdateProgramInput, WithOwner},
};

/// プログラム API の共有状態
pub struct ProgramState {
   pub usecase: ProgramUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// プログラム作成リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProgramRequest {
   pub title:       String,
   pub description: String,
   pub user_id:     i64,
}

/// プログラム更新リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProgramRequest {
   #[serde(default, deserialize_with = "present")]
   pub title:       Option<String>,
   #[serde(default, deserialize_with = "present")]
   pub description: Option<String>,
   #[serde(default, deserialize_with = "present")]
   pub user_id:     Option<i64>,
}

/// プログラム DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgramDto {
   pub id:          i64,
   pub title:       String,
   pub description: String,
   pub user:        Option<UserSummaryDto>,
   pub created_at:  String,
   pub updated_at:  String,
}

impl From<WithOwner<Program>> for ProgramDto {
   fn from(WithOwner { record, owner }: WithOwner<Program>) -> Self {
      Self {
         id:          record.id().value(),
         title:       record.title().to_string(),
         description: record.description().to_string(),
         user:        owner.map(UserSummaryDto::from),
         created_at:  record.created_at().to_rfc3339(),
         updated_at:  record.updated_at().to_rfc3339(),
      }
   }
}

// --- ハンドラ ---

/// GET /api/v1/programs
#[tracing::instrument(skip_all)]
pub async fn list_programs(
   State(state): State<Arc<ProgramState>>,
   query: Result<ValidQuery<ListQuery>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidQuery(query) = query.map_err(|e| e.during(Operation::List))?;

   let request = query
      .to_page_request()
      .map_err(|e| ApiError::from(e).during(Operation::List))?;

   let page = state
      .usecase
      .list_programs(request)
      .await
      .map_err(|e| e.during(Operation::List))?;

   Ok(Json(paginated(page, ProgramDto::from)))
}

/// POST /api/v1/programs
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたプログラム
/// - `400 Bad Request`: バリデーションエラー、存在しないユーザー
#[tracing::instrument(skip_all)]
pub async fn create_program(
   State(state): State<Arc<ProgramState>>,
   req: Result<ValidJson<CreateProgramRequest>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidJson(req) = req.map_err(|e| e.during(Operation::Create))?;

   let input = CreateProgramInput {
      title:       req.title,
      description: req.description,
      user_id:     req.user_id,
   };

   let program = state
      .usecase
      .create_program(input)
      .await
      .map_err(|e| e.during(Operation::Create))?;

   Ok((
      StatusCode::CREATED,
      Json(ApiResponse::new(ProgramDto::from(program))),
   ))
}

/// GET /api/v1/programs/{id}
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn get_program(
   State(state): State<Arc<ProgramState>>,
   id: Result<ValidPath<i64>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidPath(id) = id.map_err(|e| e.during(Operation::Show))?;
   tracing::Span::current().record("id", id);

   let program = state
      .usecase
      .get_program(ProgramId::new(id))
      .await
      .map_err(|e| e.during(Operation::Show))?;

   Ok(Json(ApiResponse::new(ProgramDto::from(program))))
}

/// PUT /api/v1/programs/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のプログラム
/// - `400 Bad Request`: バリデーションエラー、存在しないユーザー
/// - `404 Not Found`: プログラムが見つからない
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn update_program(
   State(state): State<Arc<ProgramState>>,
   id: Result<ValidPath<i64>, ApiError>,
   req: Result<ValidJson<UpdateProgramRequest>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidPath(id) = id.map_err(|e| e.during(Operation::Update))?;
   tracing::Span::current().record("id", id);
   let ValidJson(req) = req.map_err(|e| e.during(Operation::Update))?;

   let input = UpdateProgramInput {
      title:       req.title,
      description: req.description,
      user_id:     req.user_id,
   };

   let program = state
      .usecase
      .update_program(ProgramId::new(id), input)
      .await
      .map_err(|e| e.during(Operation::Update))?;

   Ok(Json(ApiResponse::new(ProgramDto::from(program))))
}

/// DELETE /api/v1/programs/{id}
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn delete_program(
   State(state): State<Arc<ProgramState>>,
   id: Result<ValidPath<i64>, ApiError>,
) -> Result<impl IntoResponse, OperationError> {
   let ValidPath(id) = id.map_err(|e| e.during(Operation::Delete))?;
   tracing::Span::current().record("id", id);

   state
      .usecase
      .delete_program(ProgramId::new(id))
      .await
      .map_err(|e| e.during(Operation::Delete))?;

   Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
   use axum::{
      Router,
      body::Body,
      http::{Method, Request},
      routing::get,
   };
   use challengehub_domain::{
      clock::FixedClock,
      user::{User, UserId},
   };
   use challengehub_infra::mock::{MockProgramRepository, MockUserRepository};
   use challengehub_shared::{ErrorResponse, PaginatedResponse};
   use chrono::DateTime;
   use pretty_assertions::assert_eq;
   use serde_json::json;
   use tower::ServiceExt;

   use super::*;

   fn create_test_app(programs: MockProgramRepository) -> Router {
      let users = MockUserRepository::new();
      users.add_user(User::from_db(
         UserId::new(1),
         "Alice".to_string(),
         "alice@example.com".to_string(),
      ));
      let usecase = ProgramUseCaseImpl::new(
         Arc::new(programs),
         Arc::new(users),
         Arc::new(FixedClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
         )),
      );
      let state = Arc::new(ProgramState { usecase });

      Router::new()
         .route("/api/v1/programs", get(list_programs).post(create_program))
         .route(
            "/api/v1/programs/{id}",
            get(get_program).put(update_program).delete(delete_program),
         )
         .with_state(state)
   }

   fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
      Request::builder()
         .method(method)
         .uri(uri)
         .header("content-type", "application/json")
         .body(Body::from(body.to_string()))
         .unwrap()
   }

   fn empty_request(method: Method, uri: &str) -> Request<Body> {
      Request::builder()
         .method(method)
         .uri(uri)
         .body(Body::empty())
         .unwrap()
   }

   async fn response_body<T: serde::de::DeserializeOwned>(
      response: axum::http::Response<Body>,
   ) -> T {
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&bytes).unwrap()
   }

   async fn seed(app: &Router, count: usize) {
      for i in 0..count {
         let response = app
            .clone()
            .oneshot(json_request(
               Method::POST,
               "/api/v1/programs",
               json!({"title": format!("Program {i}"), "description": "Test", "user_id": 1}),
            ))
            .await
            .unwrap();
         assert_eq!(response.status(), StatusCode::CREATED);
      }
   }

   #[tokio::test]
   async fn test_post_programs正常系_201で作成されたプログラムが返る() {
      // Given
      let sut = create_test_app(MockProgramRepository::new());
      let request = json_request(
         Method::POST,
         "/api/v1/programs",
         json!({"title": "Rust 入門", "description": "所有権から", "user_id": 1}),
      );

      // When
      let response = sut.oneshot(request).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::CREATED);
      let body: ApiResponse<ProgramDto> = response_body(response).await;
      assert_eq!(body.data.id, 1);
      assert_eq!(body.data.title, "Rust 入門");
      assert_eq!(
         body.data.user,
         Some(UserSummaryDto {
            id:    1,
            name:  "Alice".to_string(),
            email: "alice@example.com".to_string(),
         })
      );
      assert_eq!(body.data.created_at, "2023-11-14T22:13:20+00:00");
   }

   #[tokio::test]
   async fn test_post_programsタイトル欠落で400が返り作成されない() {
      // Given
      let programs = MockProgramRepository::new();
      let sut = create_test_app(programs.clone());
      let request = json_request(
         Method::POST,
         "/api/v1/programs",
         json!({"description": "Test", "user_id": 1}),
      );

      // When
      let response = sut.oneshot(request).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Data not saved");
      assert_eq!(body.code, 400);
      assert!(body.error.contains("title"), "error: {}", body.error);
      assert!(programs.is_empty());
   }

   #[tokio::test]
   async fn test_post_programs未知のフィールドで400が返る() {
      let programs = MockProgramRepository::new();
      let sut = create_test_app(programs.clone());
      let request = json_request(
         Method::POST,
         "/api/v1/programs",
         json!({"title": "Test", "description": "Test", "user_id": 1, "is_admin": true}),
      );

      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      assert!(programs.is_empty());
   }

   #[tokio::test]
   async fn test_post_programs存在しないユーザーで400が返る() {
      let sut = create_test_app(MockProgramRepository::new());
      let request = json_request(
         Method::POST,
         "/api/v1/programs",
         json!({"title": "Test", "description": "Test", "user_id": 42}),
      );

      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Data not saved");
   }

   #[tokio::test]
   async fn test_get_programs未指定なら10件まで返る() {
      // Given
      let sut = create_test_app(MockProgramRepository::new());
      seed(&sut, 12).await;

      // When
      let response = sut
         .oneshot(empty_request(Method::GET, "/api/v1/programs"))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: PaginatedResponse<ProgramDto> = response_body(response).await;
      assert_eq!(body.data.len(), 10);
      assert_eq!(body.data[0].id, 1);
      assert_eq!(body.meta.total, 12);
      assert_eq!(body.meta.last_page, 2);
   }

   #[tokio::test]
   async fn test_get_programs_itemsとpageを指定できる() {
      let sut = create_test_app(MockProgramRepository::new());
      seed(&sut, 5).await;

      let response = sut
         .oneshot(empty_request(Method::GET, "/api/v1/programs?items=2&page=3"))
         .await
         .unwrap();

      let body: PaginatedResponse<ProgramDto> = response_body(response).await;
      assert_eq!(body.data.len(), 1);
      assert_eq!(body.data[0].title, "Program 4");
      assert_eq!(body.meta.from, Some(5));
      assert_eq!(body.meta.to, Some(5));
   }

   #[tokio::test]
   async fn test_get_programs範囲外のページは空配列() {
      let sut = create_test_app(MockProgramRepository::new());
      seed(&sut, 3).await;

      let response = sut
         .oneshot(empty_request(Method::GET, "/api/v1/programs?page=9"))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      let body: PaginatedResponse<ProgramDto> = response_body(response).await;
      assert!(body.data.is_empty());
      assert_eq!(body.meta.from, None);
   }

   #[tokio::test]
   async fn test_get_programs不正なitemsで400が返る() {
      let sut = create_test_app(MockProgramRepository::new());

      let response = sut
         .oneshot(empty_request(Method::GET, "/api/v1/programs?items=0"))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Not listed");
   }

   #[tokio::test]
   async fn test_put_programs送信したフィールドのみ更新される() {
      // Given
      let sut = create_test_app(MockProgramRepository::new());
      seed(&sut, 1).await;

      // When
      let response = sut
         .clone()
         .oneshot(json_request(
            Method::PUT,
            "/api/v1/programs/1",
            json!({"title": "New Test"}),
         ))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: ApiResponse<ProgramDto> = response_body(response).await;
      assert_eq!(body.data.title, "New Test");
      assert_eq!(body.data.description, "Test");
   }

   #[tokio::test]
   async fn test_put_programs明示的なnullは400で変更されない() {
      // Given
      let sut = create_test_app(MockProgramRepository::new());
      seed(&sut, 1).await;

      // When
      let response = sut
         .clone()
         .oneshot(json_request(
            Method::PUT,
            "/api/v1/programs/1",
            json!({"title": null}),
         ))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Not updated");

      let response = sut
         .oneshot(empty_request(Method::GET, "/api/v1/programs/1"))
         .await
         .unwrap();
      let found: ApiResponse<ProgramDto> = response_body(response).await;
      assert_eq!(found.data.title, "Program 0");
   }

   #[tokio::test]
   async fn test_put_programs存在しないidで404が返る() {
      let sut = create_test_app(MockProgramRepository::new());

      let response = sut
         .oneshot(json_request(
            Method::PUT,
            "/api/v1/programs/1500",
            json!({"title": "New Test"}),
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Not updated");
      assert_eq!(body.code, 404);
   }

   #[tokio::test]
   async fn test_delete_programs存在しないidで404が返る() {
      let sut = create_test_app(MockProgramRepository::new());

      let response = sut
         .oneshot(empty_request(Method::DELETE, "/api/v1/programs/1500"))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Not deleted");
   }

   #[tokio::test]
   async fn test_get_programs数値でないidで400が返る() {
      let sut = create_test_app(MockProgramRepository::new());

      let response = sut
         .oneshot(empty_request(Method::GET, "/api/v1/programs/abc"))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Not found");
      assert_eq!(body.code, 400);
   }

   #[tokio::test]
   async fn test_delete_programs数値でないidは削除失敗のメッセージ() {
      let sut = create_test_app(MockProgramRepository::new());

      let response = sut
         .oneshot(empty_request(Method::DELETE, "/api/v1/programs/abc"))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body: ErrorResponse = response_body(response).await;
      assert_eq!(body.message, "Not deleted");
   }
}

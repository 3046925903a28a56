//! # リクエスト抽出
//!
//! axum 標準の `Json` / `Query` / `Path` をラップし、抽出失敗を
//! [`ApiError::Validation`] に変換する。
//! これにより、不正な JSON や数値でない ID もエラーレスポンスの形式が揃う。

use axum::{
   extract::{FromRequest, FromRequestParts, Path, Query, Request},
   http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON ボディ
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
   T: DeserializeOwned,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      axum::Json::<T>::from_request(req, state)
         .await
         .map(|axum::Json(value)| Self(value))
         .map_err(|rejection| ApiError::Validation(rejection.body_text()))
   }
}

/// クエリパラメータ
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
   T: DeserializeOwned,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      Query::<T>::from_request_parts(parts, state)
         .await
         .map(|Query(value)| Self(value))
         .map_err(|rejection| ApiError::Validation(rejection.body_text()))
   }
}

/// パスパラメータ
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
   T: DeserializeOwned + Send,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      Path::<T>::from_request_parts(parts, state)
         .await
         .map(|Path(value)| Self(value))
         .map_err(|rejection| ApiError::Validation(rejection.body_text()))
   }
}

//! # ヘルスチェックのレスポンス型
//!
//! `GET /health`（プロセスの生存）と `GET /health/ready`（依存サービスへの疎通）
//! のボディを定義する。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `GET /health` のボディ
///
/// ```
/// use challengehub_shared::HealthResponse;
///
/// let body = HealthResponse::healthy("0.1.0");
/// assert_eq!(body.status, "healthy");
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
   pub status:  String,
   /// パッケージのバージョン
   pub version: String,
}

impl HealthResponse {
   pub fn healthy(version: impl Into<String>) -> Self {
      Self {
         status:  "healthy".to_string(),
         version: version.into(),
      }
   }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
   Ok,
   Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
   Ready,
   NotReady,
}

/// `GET /health/ready` のボディ
///
/// `checks` のキーは依存先の名前（`"database"` など）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
   pub status: ReadinessStatus,
   pub checks: HashMap<String, CheckStatus>,
}

impl ReadinessResponse {
   /// すべて `Ok` のときだけ `Ready` にする
   pub fn from_checks(checks: HashMap<String, CheckStatus>) -> Self {
      let status = if checks.values().all(|c| *c == CheckStatus::Ok) {
         ReadinessStatus::Ready
      } else {
         ReadinessStatus::NotReady
      };
      Self { status, checks }
   }
}

//! # ChallengeHub API サーバー
//!
//! Program と Challenge を CRUD する REST API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! HTTP ──▶ handler ──▶ usecase ──▶ repository（infra） ──▶ PostgreSQL
//!            │            │
//!            │            └─ 検証（domain）・所有者の解決
//!            └─ 抽出・DTO 整形・エラー → HTTP 変換
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - 抽出失敗を 400 に揃えるリクエスト抽出
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;

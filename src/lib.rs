//! # E-learning
//!
//! 受講者・教師・科目の関係ルールと、コレクション単位のJSON永続化
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、履修・所有者ポリシー、ストアのtrait（外部依存なし）
//! - **Application層**: ポリシーとストアを組み合わせたユースケース
//! - **Adapter層**: JSONファイルによる永続化、設定ファイル
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

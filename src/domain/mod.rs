//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ファイルシステムやCLIについて何も知らない
//! - ポリシー（履修・所有者判定）は永続化を知らず、永続化はポリシーを知らない
//! - 関係の比較は常にIDで行う
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Student, Teacher, Subject）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ビジネスルール）

pub mod entities;
pub mod repositories;
pub mod services;

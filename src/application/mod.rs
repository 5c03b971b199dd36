//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - ポリシーが `false` を返した場合の拒否はこの層で行う
//!
//! ## 構成要素
//!
//! - **use_cases**: ユースケース

pub mod use_cases;

//! # Domain Services
//!
//! エンティティ間の関係に関するビジネスルール
//!
//! - **EnrollmentService**: 履修の重複排除
//! - **OwnershipService**: 科目の所有者判定

pub mod enrollment;
pub mod ownership;

pub use enrollment::EnrollmentService;
pub use ownership::OwnershipService;

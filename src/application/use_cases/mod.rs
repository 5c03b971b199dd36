//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **RegisterUserUseCase**: 受講者・教師の登録
//! - **ManageSubjectsUseCase**: 科目の作成と所有者による更新
//! - **EnrollStudentUseCase**: 履修登録
//! - **ViewEnrollmentsUseCase**: 履修科目の参照（ID参照の結合）

pub mod enroll_student;
pub mod manage_subjects;
pub mod register_user;
pub mod view_enrollments;

pub use enroll_student::{EnrollStudentUseCase, EnrollmentOutcome};
pub use manage_subjects::{ManageSubjectsUseCase, SubjectAccessError, SubjectChanges};
pub use register_user::RegisterUserUseCase;
pub use view_enrollments::{EnrollmentView, ViewEnrollmentsUseCase};

//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Student**: 受講者（履修科目をIDで保持）
//! - **Teacher**: 教師（担当科目をIDで保持）
//! - **Subject**: 科目（所有者の教師IDを保持、所有権の移譲は不可）
//!
//! ## バリューオブジェクト
//!
//! - **StudentId / TeacherId / SubjectId**: 種別ごとの識別子
//! - **Credential**: パスワード（ログに出力されない）

pub mod identity;
pub mod student;
pub mod subject;
pub mod teacher;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use identity::{Credential, StudentId, SubjectId, TeacherId};
pub use student::Student;
pub use subject::Subject;
pub use teacher::Teacher;

/// エンティティ構築時のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// 永続化可能なエンティティ
///
/// エンティティ種別ごとに固定のコレクション名を持つ。
/// 異なる種別が同じ保存先を共有しないよう、名前は種別ごとに一意であること。
pub trait Record: Serialize + DeserializeOwned {
    /// 論理コレクション名
    const COLLECTION: &'static str;
}

impl Record for Student {
    const COLLECTION: &'static str = "Student";
}

impl Record for Teacher {
    const COLLECTION: &'static str = "Teacher";
}

impl Record for Subject {
    const COLLECTION: &'static str = "Subject";
}

/// 空文字列（空白のみを含む）を拒否する
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), EntityError> {
    if value.trim().is_empty() {
        return Err(EntityError::EmptyField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names_are_distinct() {
        let names = [Student::COLLECTION, Teacher::COLLECTION, Subject::COLLECTION];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("username", "alice").is_ok());
        assert_eq!(
            require_non_empty("username", "   "),
            Err(EntityError::EmptyField("username"))
        );
    }

    #[test]
    fn test_entity_error_message() {
        let err = EntityError::EmptyField("name");
        assert_eq!(err.to_string(), "name cannot be empty");
    }
}

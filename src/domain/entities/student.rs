//! # Student Entity
//!
//! 受講者のドメインエンティティ

use serde::{Deserialize, Serialize};

use super::identity::{Credential, StudentId, SubjectId};
use super::{require_non_empty, EntityError};

/// 受講者
///
/// 履修科目は科目IDの列として保持する（挿入順 = 履修順）。
/// 履修の追加は `EnrollmentService::enroll` を経由し、同じ科目IDが二度並ぶことはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    username: String,
    password: Credential,
    name: String,
    #[serde(
        default,
        deserialize_with = "crate::domain::entities::identity::deserialize_unique_ids"
    )]
    pub(in crate::domain) enrolled_subjects: Vec<SubjectId>,
}

impl Student {
    /// 新しい受講者を作成
    ///
    /// # Arguments
    ///
    /// * `username` - ログイン名
    /// * `password` - パスワード
    /// * `name` - 表示名
    ///
    /// # Errors
    ///
    /// ユーザー名・表示名が空の場合にエラーを返す
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, EntityError> {
        let username = username.into();
        let name = name.into();
        require_non_empty("username", &username)?;
        require_non_empty("name", &name)?;

        Ok(Self {
            id: StudentId::generate(),
            username,
            password: Credential::new(password),
            name,
            enrolled_subjects: Vec::new(),
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Credential {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 履修中の科目ID（履修順）
    pub fn enrolled_subjects(&self) -> &[SubjectId] {
        &self.enrolled_subjects
    }

    /// 指定科目を履修済みかどうか
    pub fn is_enrolled_in(&self, subject_id: SubjectId) -> bool {
        self.enrolled_subjects.contains(&subject_id)
    }
}

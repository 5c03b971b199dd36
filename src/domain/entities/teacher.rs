//! # Teacher Entity
//!
//! 教師のドメインエンティティ

use serde::{Deserialize, Serialize};

use super::identity::{Credential, SubjectId, TeacherId};
use super::{require_non_empty, EntityError};

/// 教師
///
/// 担当科目（MySubjects）は科目IDの列として保持する。
/// 追加は `OwnershipService::assign` を経由し、所有者である科目のみが並ぶ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    id: TeacherId,
    username: String,
    password: Credential,
    name: String,
    #[serde(
        default,
        deserialize_with = "crate::domain::entities::identity::deserialize_unique_ids"
    )]
    pub(in crate::domain) my_subjects: Vec<SubjectId>,
}

impl Teacher {
    /// 新しい教師を作成
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
            id: TeacherId::generate(),
            username,
            password: Credential::new(password),
            name,
            my_subjects: Vec::new(),
        })
    }

    pub fn id(&self) -> TeacherId {
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

    /// 担当科目ID
    pub fn my_subjects(&self) -> &[SubjectId] {
        &self.my_subjects
    }
}

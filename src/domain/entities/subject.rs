//! # Subject Entity
//!
//! 科目のドメインエンティティ

use serde::{Deserialize, Serialize};

use super::identity::{SubjectId, TeacherId};
use super::{require_non_empty, EntityError};

/// 科目
///
/// `teacher_id` は作成時に決まり、以後変更できない（所有権の移譲なし）。
/// 参照先の教師が存在しない状態も有効であり、その場合はどの教師も変更できない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    id: SubjectId,
    name: String,
    description: String,
    teacher_id: TeacherId,
}

impl Subject {
    /// 新しい科目を作成
    ///
    /// # Arguments
    ///
    /// * `name` - 科目名
    /// * `description` - 説明
    /// * `teacher_id` - 所有者となる教師のID
    ///
    /// # Errors
    ///
    /// 科目名が空の場合にエラーを返す
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        teacher_id: TeacherId,
    ) -> Result<Self, EntityError> {
        let name = name.into();
        require_non_empty("name", &name)?;

        Ok(Self {
            id: SubjectId::generate(),
            name,
            description: description.into(),
            teacher_id,
        })
    }

    pub fn id(&self) -> SubjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// 所有者の教師ID
    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }

    /// 科目名を変更
    ///
    /// 所有者の確認は呼び出し側が `OwnershipService::can_modify` で行う。
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), EntityError> {
        let name = name.into();
        require_non_empty("name", &name)?;
        self.name = name;
        Ok(())
    }

    /// 説明を変更
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

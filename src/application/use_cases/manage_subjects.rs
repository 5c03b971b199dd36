//! # Manage Subjects Use Case
//!
//! 科目の作成・更新ユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::entities::{Subject, SubjectId, Teacher, TeacherId};
use crate::domain::repositories::collection_store::CollectionStore;
use crate::domain::services::OwnershipService;

/// 科目操作の拒否理由
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubjectAccessError {
    #[error("teacher {0} not found")]
    TeacherNotFound(TeacherId),

    #[error("subject {0} not found")]
    SubjectNotFound(SubjectId),

    #[error("teacher {teacher} does not own subject {subject}")]
    NotOwner {
        teacher: TeacherId,
        subject: SubjectId,
    },
}

/// 科目の変更内容（`None` の項目は変更しない）
#[derive(Debug, Clone, Default)]
pub struct SubjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// 科目管理ユースケース
pub struct ManageSubjectsUseCase<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> ManageSubjectsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 教師が所有する科目を作成する
    ///
    /// 科目を保存した後、教師の担当科目に追加して保存する。
    /// 教師の保存に失敗した場合は科目コレクションを元の内容に戻す。
    ///
    /// # Errors
    ///
    /// 教師が存在しない、入力が不正、または保存に失敗した場合にエラーを返す
    pub fn create_subject(
        &self,
        teacher_id: TeacherId,
        name: &str,
        description: &str,
    ) -> Result<Subject> {
        let mut teachers: Vec<Teacher> = self.store.load_all().context("Failed to load teachers")?;
        let teacher = teachers
            .iter_mut()
            .find(|t| t.id() == teacher_id)
            .ok_or(SubjectAccessError::TeacherNotFound(teacher_id))?;

        let subject = Subject::new(name, description, teacher_id)?;

        let previous_subjects: Vec<Subject> =
            self.store.load_all().context("Failed to load subjects")?;
        let mut subjects = previous_subjects.clone();
        subjects.push(subject.clone());
        self.store
            .save_all(&subjects)
            .context("Failed to save subjects")?;

        OwnershipService::assign(teacher, &subject);
        if let Err(e) = self.store.save_all(&teachers) {
            // 所有者の担当科目に載らない科目を残さない
            warn!("Failed to save teachers, restoring subjects: {}", e);
            if let Err(restore_err) = self.store.save_all(&previous_subjects) {
                warn!("Failed to restore subjects: {}", restore_err);
            }
            return Err(anyhow::Error::new(e).context("Failed to save teachers"));
        }

        info!("Created subject {} ({}) for teacher {}", subject.name(), subject.id(), teacher_id);

        Ok(subject)
    }

    /// 科目を更新する
    ///
    /// 所有者でない教師からの更新は `SubjectAccessError::NotOwner` で拒否する。
    ///
    /// # Errors
    ///
    /// 教師・科目が存在しない、所有者でない、入力が不正、または保存に失敗した場合にエラーを返す
    pub fn update_subject(
        &self,
        teacher_id: TeacherId,
        subject_id: SubjectId,
        changes: SubjectChanges,
    ) -> Result<Subject> {
        let teachers: Vec<Teacher> = self.store.load_all().context("Failed to load teachers")?;
        let teacher = teachers
            .iter()
            .find(|t| t.id() == teacher_id)
            .ok_or(SubjectAccessError::TeacherNotFound(teacher_id))?;

        let mut subjects: Vec<Subject> = self.store.load_all().context("Failed to load subjects")?;
        let subject = subjects
            .iter_mut()
            .find(|s| s.id() == subject_id)
            .ok_or(SubjectAccessError::SubjectNotFound(subject_id))?;

        if !OwnershipService::can_modify(subject, teacher) {
            warn!("Teacher {} denied update of subject {}", teacher_id, subject_id);
            return Err(SubjectAccessError::NotOwner {
                teacher: teacher_id,
                subject: subject_id,
            }
            .into());
        }

        if let Some(name) = changes.name {
            subject.rename(name)?;
        }
        if let Some(description) = changes.description {
            subject.set_description(description);
        }
        let updated = subject.clone();

        self.store
            .save_all(&subjects)
            .context("Failed to save subjects")?;

        info!("Updated subject {}", subject_id);

        Ok(updated)
    }
}

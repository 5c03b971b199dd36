//! # Enroll Student Use Case
//!
//! 履修登録ユースケース

use anyhow::{anyhow, Context, Result};
use log::info;
use std::sync::Arc;

use crate::domain::entities::{Student, StudentId, Subject, SubjectId};
use crate::domain::repositories::collection_store::CollectionStore;
use crate::domain::services::EnrollmentService;

/// 履修登録の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    /// 新たに登録した
    Enrolled,
    /// 既に履修済みだった（何も変更していない）
    AlreadyEnrolled,
}

/// 履修登録ユースケース
pub struct EnrollStudentUseCase<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> EnrollStudentUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 受講者を科目に履修登録する
    ///
    /// 既に履修済みの場合は保存を行わずに `AlreadyEnrolled` を返す。
    ///
    /// # Errors
    ///
    /// 受講者・科目が存在しない、または保存に失敗した場合にエラーを返す
    pub fn execute(&self, student_id: StudentId, subject_id: SubjectId) -> Result<EnrollmentOutcome> {
        let subjects: Vec<Subject> = self.store.load_all().context("Failed to load subjects")?;
        let subject = subjects
            .iter()
            .find(|s| s.id() == subject_id)
            .ok_or_else(|| anyhow!("Subject {} not found", subject_id))?;

        let mut students: Vec<Student> = self.store.load_all().context("Failed to load students")?;
        let student = students
            .iter_mut()
            .find(|s| s.id() == student_id)
            .ok_or_else(|| anyhow!("Student {} not found", student_id))?;

        if !EnrollmentService::enroll(student, subject) {
            info!("Student {} already enrolled in {}", student_id, subject_id);
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }

        self.store
            .save_all(&students)
            .context("Failed to save students")?;

        info!("Enrolled student {} in {}", student_id, subject.name());

        Ok(EnrollmentOutcome::Enrolled)
    }
}

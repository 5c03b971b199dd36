//! # View Enrollments Use Case
//!
//! 履修科目の参照ユースケース

use anyhow::{anyhow, Context, Result};
use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Student, StudentId, Subject, SubjectId};
use crate::domain::repositories::collection_store::CollectionStore;

/// 受講者と履修科目の結合結果
#[derive(Debug, Clone)]
pub struct EnrollmentView {
    pub student: Student,
    /// 履修順に並んだ科目
    pub subjects: Vec<Subject>,
    /// 科目コレクションに存在しない科目ID
    pub missing: Vec<SubjectId>,
}

/// 履修科目参照ユースケース
///
/// 受講者が保持する科目IDを科目コレクションと結合する。
/// 結合先は常に正規の科目レコードなので、科目の更新は即座に反映される。
pub struct ViewEnrollmentsUseCase<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> ViewEnrollmentsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// 受講者が存在しない、または読み込みに失敗した場合にエラーを返す
    pub fn execute(&self, student_id: StudentId) -> Result<EnrollmentView> {
        let students: Vec<Student> = self.store.load_all().context("Failed to load students")?;
        let student = students
            .into_iter()
            .find(|s| s.id() == student_id)
            .ok_or_else(|| anyhow!("Student {} not found", student_id))?;

        let subjects: Vec<Subject> = self.store.load_all().context("Failed to load subjects")?;
        let by_id: HashMap<SubjectId, Subject> =
            subjects.into_iter().map(|s| (s.id(), s)).collect();

        let (subjects, missing) = join_subjects(student.enrolled_subjects(), &by_id);
        if !missing.is_empty() {
            warn!(
                "Student {} references {} missing subjects",
                student_id,
                missing.len()
            );
        }

        Ok(EnrollmentView {
            student,
            subjects,
            missing,
        })
    }
}

fn join_subjects(
    ids: &[SubjectId],
    by_id: &HashMap<SubjectId, Subject>,
) -> (Vec<Subject>, Vec<SubjectId>) {
    let mut found = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for id in ids {
        match by_id.get(id) {
            Some(subject) => found.push(subject.clone()),
            None => missing.push(*id),
        }
    }

    (found, missing)
}

//! # Register User Use Case
//!
//! 受講者・教師の登録ユースケース

use anyhow::{bail, Context, Result};
use log::info;
use std::sync::Arc;

use crate::domain::entities::{Student, Teacher};
use crate::domain::repositories::collection_store::CollectionStore;

/// ユーザー登録ユースケース
///
/// 同じ種別内でユーザー名が重複する登録は拒否する
pub struct RegisterUserUseCase<S: CollectionStore> {
    store: Arc<S>,
}

impl<S: CollectionStore> RegisterUserUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 受講者を登録する
    ///
    /// # Errors
    ///
    /// 入力が不正、ユーザー名が使用済み、または保存に失敗した場合にエラーを返す
    pub fn register_student(&self, username: &str, password: &str, name: &str) -> Result<Student> {
        let mut students: Vec<Student> = self.store.load_all().context("Failed to load students")?;

        if students.iter().any(|s| s.username() == username) {
            bail!("Student username '{}' is already taken", username);
        }

        let student = Student::new(username, password, name)?;
        students.push(student.clone());
        self.store
            .save_all(&students)
            .context("Failed to save students")?;

        info!("Registered student {} ({})", student.username(), student.id());

        Ok(student)
    }

    /// 教師を登録する
    ///
    /// # Errors
    ///
    /// 入力が不正、ユーザー名が使用済み、または保存に失敗した場合にエラーを返す
    pub fn register_teacher(&self, username: &str, password: &str, name: &str) -> Result<Teacher> {
        let mut teachers: Vec<Teacher> = self.store.load_all().context("Failed to load teachers")?;

        if teachers.iter().any(|t| t.username() == username) {
            bail!("Teacher username '{}' is already taken", username);
        }

        let teacher = Teacher::new(username, password, name)?;
        teachers.push(teacher.clone());
        self.store
            .save_all(&teachers)
            .context("Failed to save teachers")?;

        info!("Registered teacher {} ({})", teacher.username(), teacher.id());

        Ok(teacher)
    }
}

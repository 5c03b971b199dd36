//! Workflow Orchestration
//!
//! 設定からストアとユースケースを組み立て、コマンドを実行する

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::JsonCollectionStore;
use crate::application::use_cases::{
    EnrollStudentUseCase, EnrollmentOutcome, ManageSubjectsUseCase, RegisterUserUseCase,
    SubjectChanges, ViewEnrollmentsUseCase,
};
use crate::domain::entities::{Student, Subject, Teacher};
use crate::domain::repositories::CollectionStore;

use super::cli::{Command, EntityKind};

/// E-learning Workflow
pub struct ELearningWorkflow {
    store: Arc<JsonCollectionStore>,
    register_use_case: RegisterUserUseCase<JsonCollectionStore>,
    subjects_use_case: ManageSubjectsUseCase<JsonCollectionStore>,
    enroll_use_case: EnrollStudentUseCase<JsonCollectionStore>,
    view_use_case: ViewEnrollmentsUseCase<JsonCollectionStore>,
}

impl ELearningWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let data_dir = config.resolved_data_dir();
        info!("Using data directory {}", data_dir.display());

        let store = Arc::new(JsonCollectionStore::open(data_dir, config.pretty));

        Self {
            register_use_case: RegisterUserUseCase::new(store.clone()),
            subjects_use_case: ManageSubjectsUseCase::new(store.clone()),
            enroll_use_case: EnrollStudentUseCase::new(store.clone()),
            view_use_case: ViewEnrollmentsUseCase::new(store.clone()),
            store,
        }
    }

    /// Execute one CLI command
    pub fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::AddTeacher {
                username,
                password,
                name,
            } => {
                let teacher = self
                    .register_use_case
                    .register_teacher(&username, &password, &name)?;
                println!("✓ Registered teacher {} ({})", teacher.username(), teacher.id());
            }
            Command::AddStudent {
                username,
                password,
                name,
            } => {
                let student = self
                    .register_use_case
                    .register_student(&username, &password, &name)?;
                println!("✓ Registered student {} ({})", student.username(), student.id());
            }
            Command::AddSubject {
                teacher_id,
                name,
                description,
            } => {
                let subject = self
                    .subjects_use_case
                    .create_subject(teacher_id, &name, &description)?;
                println!("✓ Created subject {} ({})", subject.name(), subject.id());
            }
            Command::Enroll {
                student_id,
                subject_id,
            } => match self.enroll_use_case.execute(student_id, subject_id)? {
                EnrollmentOutcome::Enrolled => println!("✓ Enrolled"),
                EnrollmentOutcome::AlreadyEnrolled => println!("✓ Already enrolled, nothing to do"),
            },
            Command::UpdateSubject {
                teacher_id,
                subject_id,
                name,
                description,
            } => {
                let subject = self.subjects_use_case.update_subject(
                    teacher_id,
                    subject_id,
                    SubjectChanges { name, description },
                )?;
                println!("✓ Updated subject {} ({})", subject.name(), subject.id());
            }
            Command::ShowStudent { student_id } => {
                let view = self.view_use_case.execute(student_id)?;
                println!("{} ({})", view.student.name(), view.student.username());
                for subject in &view.subjects {
                    println!("  - {} | {}", subject.name(), subject.id());
                }
                for id in &view.missing {
                    println!("  ⚠ missing subject {}", id);
                }
            }
            Command::List { kind } => self.list(kind)?,
            Command::Collections => {
                for name in self.store.collections()? {
                    println!("{}", name);
                }
            }
        }

        Ok(())
    }

    fn list(&self, kind: EntityKind) -> Result<()> {
        match kind {
            EntityKind::Students => {
                let students: Vec<Student> = self.store.load_all()?;
                for s in &students {
                    println!(
                        "{} | {} | {} | {} subjects",
                        s.id(),
                        s.username(),
                        s.name(),
                        s.enrolled_subjects().len()
                    );
                }
            }
            EntityKind::Teachers => {
                let teachers: Vec<Teacher> = self.store.load_all()?;
                for t in &teachers {
                    println!(
                        "{} | {} | {} | {} subjects",
                        t.id(),
                        t.username(),
                        t.name(),
                        t.my_subjects().len()
                    );
                }
            }
            EntityKind::Subjects => {
                let subjects: Vec<Subject> = self.store.load_all()?;
                for s in &subjects {
                    println!("{} | {} | owner {}", s.id(), s.name(), s.teacher_id());
                }
            }
        }

        Ok(())
    }
}

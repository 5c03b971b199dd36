//! Workflow Integration Tests
//!
//! ELearningWorkflow の統合テスト

use elearning::adapter::config::Config;
use elearning::adapter::repositories::JsonCollectionStore;
use elearning::application::use_cases::SubjectAccessError;
use elearning::domain::entities::{Student, Subject, Teacher};
use elearning::domain::repositories::CollectionStore;
use elearning::driver::cli::{Command, EntityKind};
use elearning::driver::workflow::ELearningWorkflow;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// テスト用のConfigを作成
fn create_test_config(dir: &Path) -> Config {
    let config_path = dir.join("config.json");
    let data_dir = dir.join("data");
    let config_content = format!(
        r#"{{ "data_dir": "{}", "pretty": true }}"#,
        data_dir.to_string_lossy()
    );
    fs::write(&config_path, config_content).unwrap();
    Config::load(config_path.to_str().unwrap()).unwrap()
}

fn open_store(dir: &Path) -> JsonCollectionStore {
    JsonCollectionStore::open(dir.join("data"), true)
}

#[test]
fn test_workflow_full_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let workflow = ELearningWorkflow::new(create_test_config(temp_dir.path()));
    let store = open_store(temp_dir.path());

    workflow
        .execute(Command::AddTeacher {
            username: "teacherA".to_string(),
            password: "passA".to_string(),
            name: "Alice Teacher".to_string(),
        })
        .unwrap();
    workflow
        .execute(Command::AddStudent {
            username: "john.doe".to_string(),
            password: "password".to_string(),
            name: "John Doe".to_string(),
        })
        .unwrap();

    let teacher_id = store.load_all::<Teacher>().unwrap()[0].id();
    workflow
        .execute(Command::AddSubject {
            teacher_id,
            name: "Mathematics".to_string(),
            description: "An introductory math course".to_string(),
        })
        .unwrap();

    let student_id = store.load_all::<Student>().unwrap()[0].id();
    let subject_id = store.load_all::<Subject>().unwrap()[0].id();
    for _ in 0..2 {
        workflow
            .execute(Command::Enroll {
                student_id,
                subject_id,
            })
            .unwrap();
    }

    let students: Vec<Student> = store.load_all().unwrap();
    assert_eq!(students[0].enrolled_subjects(), &[subject_id]);

    workflow
        .execute(Command::ShowStudent { student_id })
        .unwrap();
    workflow
        .execute(Command::List {
            kind: EntityKind::Subjects,
        })
        .unwrap();
    workflow.execute(Command::Collections).unwrap();

    assert_eq!(
        store.collections().unwrap(),
        vec!["Student", "Subject", "Teacher"]
    );
}

#[test]
fn test_workflow_rejects_non_owner_update() {
    let temp_dir = TempDir::new().unwrap();
    let workflow = ELearningWorkflow::new(create_test_config(temp_dir.path()));
    let store = open_store(temp_dir.path());

    for (username, name) in [("teacherA", "Alice Teacher"), ("teacherB", "Bob Teacher")] {
        workflow
            .execute(Command::AddTeacher {
                username: username.to_string(),
                password: "pw".to_string(),
                name: name.to_string(),
            })
            .unwrap();
    }
    let teachers: Vec<Teacher> = store.load_all().unwrap();
    let (teacher_a, teacher_b) = (teachers[0].id(), teachers[1].id());

    workflow
        .execute(Command::AddSubject {
            teacher_id: teacher_a,
            name: "Physics".to_string(),
            description: "Fundamentals of Physics".to_string(),
        })
        .unwrap();
    let subject_id = store.load_all::<Subject>().unwrap()[0].id();

    let err = workflow
        .execute(Command::UpdateSubject {
            teacher_id: teacher_b,
            subject_id,
            name: Some("Hijacked".to_string()),
            description: None,
        })
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SubjectAccessError>(),
        Some(SubjectAccessError::NotOwner { .. })
    ));
    assert_eq!(store.load_all::<Subject>().unwrap()[0].name(), "Physics");
}

#[test]
fn test_workflow_empty_data_directory() {
    let temp_dir = TempDir::new().unwrap();
    let workflow = ELearningWorkflow::new(create_test_config(temp_dir.path()));

    // 初回起動（データ無し）でも一覧は成功する
    let result = workflow.execute(Command::List {
        kind: EntityKind::Students,
    });

    assert!(
        result.is_ok(),
        "Workflow should handle an empty data directory, but got: {:?}",
        result
    );
}

//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::entities::{StudentId, SubjectId, TeacherId};

/// 受講者・教師・科目を管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "elearning")]
#[command(about = "Manage students, teachers and subjects stored as JSON collections", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.elearning/config.json")]
    pub config: String,

    /// Data directory (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a teacher
    AddTeacher {
        username: String,
        password: String,
        name: String,
    },

    /// Register a student
    AddStudent {
        username: String,
        password: String,
        name: String,
    },

    /// Create a subject owned by a teacher
    AddSubject {
        #[arg(long)]
        teacher_id: TeacherId,
        name: String,
        #[arg(default_value = "")]
        description: String,
    },

    /// Enroll a student in a subject
    Enroll {
        #[arg(long)]
        student_id: StudentId,
        #[arg(long)]
        subject_id: SubjectId,
    },

    /// Update a subject (owner only)
    UpdateSubject {
        #[arg(long)]
        teacher_id: TeacherId,
        #[arg(long)]
        subject_id: SubjectId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Show a student with enrolled subjects
    ShowStudent {
        #[arg(long)]
        student_id: StudentId,
    },

    /// List all records of one kind
    List {
        #[arg(value_enum)]
        kind: EntityKind,
    },

    /// List stored collections
    Collections,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Students,
    Teachers,
    Subjects,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["elearning", "collections"]);
        assert_eq!(args.config, "./.elearning/config.json");
        assert!(args.data_dir.is_none());
        assert!(matches!(args.command, Command::Collections));
    }

    #[test]
    fn test_args_add_student() {
        let args = Args::parse_from([
            "elearning",
            "--data-dir",
            "/tmp/data",
            "add-student",
            "alice",
            "pass123",
            "Alice Wonderland",
        ]);
        assert_eq!(args.data_dir.as_deref(), Some("/tmp/data"));
        match args.command {
            Command::AddStudent {
                username,
                password,
                name,
            } => {
                assert_eq!(username, "alice");
                assert_eq!(password, "pass123");
                assert_eq!(name, "Alice Wonderland");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_enroll_parses_ids() {
        let args = Args::parse_from([
            "elearning",
            "enroll",
            "--student-id",
            "550e8400-e29b-41d4-a716-446655440000",
            "--subject-id",
            "550e8400-e29b-41d4-a716-446655440001",
        ]);
        match args.command {
            Command::Enroll {
                student_id,
                subject_id,
            } => {
                assert_eq!(student_id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
                assert_eq!(subject_id.to_string(), "550e8400-e29b-41d4-a716-446655440001");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_invalid_id_rejected() {
        let result = Args::try_parse_from(["elearning", "show-student", "--student-id", "42"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_list_kind() {
        let args = Args::parse_from(["elearning", "list", "subjects"]);
        assert!(matches!(
            args.command,
            Command::List {
                kind: EntityKind::Subjects
            }
        ));
    }
}

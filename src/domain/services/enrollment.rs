//! # Enrollment Service
//!
//! 履修登録サービス

use crate::domain::entities::{Student, Subject};

/// 履修登録サービス
///
/// 受講者の履修一覧に同じ科目が二度並ばないことを保証する。
/// 比較は科目IDで行う（ロード後は各側が別々のインスタンスを持つため）。
pub struct EnrollmentService;

impl EnrollmentService {
    /// 受講者を科目に履修登録する
    ///
    /// 既に同じIDの科目を履修している場合は何もしない（エラーにはしない）。
    ///
    /// # Arguments
    ///
    /// * `student` - 受講者
    /// * `subject` - 科目
    ///
    /// # Returns
    ///
    /// 新たに登録した場合に `true`、既に履修済みだった場合に `false`
    pub fn enroll(student: &mut Student, subject: &Subject) -> bool {
        let subject_id = subject.id();
        if student.enrolled_subjects.contains(&subject_id) {
            return false;
        }

        student.enrolled_subjects.push(subject_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TeacherId;

    fn math() -> Subject {
        Subject::new("Mathematics", "An introductory math course", TeacherId::generate()).unwrap()
    }

    #[test]
    fn test_enroll_once() {
        let mut student = Student::new("john.doe", "password", "John Doe").unwrap();
        let subject = math();

        assert!(EnrollmentService::enroll(&mut student, &subject));
        assert_eq!(student.enrolled_subjects(), &[subject.id()]);
    }

    #[test]
    fn test_enroll_twice_is_noop() {
        let mut student = Student::new("john.doe", "password", "John Doe").unwrap();
        let subject = math();

        assert!(EnrollmentService::enroll(&mut student, &subject));
        assert!(!EnrollmentService::enroll(&mut student, &subject));

        assert_eq!(student.enrolled_subjects().len(), 1);
        assert!(student.is_enrolled_in(subject.id()));
    }

    #[test]
    fn test_enroll_uses_identity_not_instance() {
        let mut student = Student::new("john.doe", "password", "John Doe").unwrap();
        let subject = math();
        // 別インスタンスでも同じIDなら重複とみなす
        let copy: Subject = serde_json::from_str(&serde_json::to_string(&subject).unwrap()).unwrap();

        EnrollmentService::enroll(&mut student, &subject);
        EnrollmentService::enroll(&mut student, &copy);

        assert_eq!(student.enrolled_subjects().len(), 1);
    }

    #[test]
    fn test_enroll_distinct_subjects_keeps_order() {
        let mut student = Student::new("john.doe", "password", "John Doe").unwrap();
        let first = math();
        let second = Subject::new("Physics", "Fundamentals of Physics", TeacherId::generate()).unwrap();

        EnrollmentService::enroll(&mut student, &first);
        EnrollmentService::enroll(&mut student, &second);
        EnrollmentService::enroll(&mut student, &first);

        assert_eq!(student.enrolled_subjects(), &[first.id(), second.id()]);
    }
}

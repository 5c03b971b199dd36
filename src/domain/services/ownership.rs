//! # Ownership Service
//!
//! 科目の所有者判定サービス

use crate::domain::entities::{Subject, Teacher};

/// 所有者判定サービス
///
/// 科目を変更できるのは `teacher_id` が一致する教師のみ。
/// このサービスは判定結果を返すだけで、拒否は呼び出し側が行う。
pub struct OwnershipService;

impl OwnershipService {
    /// 教師が科目を変更できるかどうか
    ///
    /// 参照先の教師が存在しない科目はどの教師に対しても `false` となる。
    pub fn can_modify(subject: &Subject, teacher: &Teacher) -> bool {
        subject.teacher_id() == teacher.id()
    }

    /// 科目を教師の担当科目（MySubjects）に追加する
    ///
    /// 所有者でない教師、または既に追加済みの場合は何もしない。
    ///
    /// # Returns
    ///
    /// 追加した場合に `true`
    pub fn assign(teacher: &mut Teacher, subject: &Subject) -> bool {
        if !Self::can_modify(subject, teacher) || teacher.my_subjects.contains(&subject.id()) {
            return false;
        }

        teacher.my_subjects.push(subject.id());
        true
    }
}

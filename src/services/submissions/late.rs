use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;

/// 判断提交是否迟交
///
/// 截止日期当天 23:59:59（UTC，与提交时间同一参考系）之前（含）不算
/// 迟交；严格晚于该时刻才算。没有截止日期的作业永不迟交。
pub fn is_late(submission: &Submission, assignment: &Assignment) -> bool {
    match assignment.due_date.and_then(|d| d.and_hms_opt(23, 59, 59)) {
        Some(deadline) => submission.submitted_at.naive_utc() > deadline,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn assignment_due(due_date: Option<NaiveDate>) -> Assignment {
        let now = Utc::now();
        Assignment {
            id: 1,
            lesson_id: 1,
            title: "第一次作业".to_string(),
            description: None,
            max_score: 100,
            due_date,
            created_at: now,
            updated_at: now,
        }
    }

    fn submission_at(submitted_at: chrono::DateTime<Utc>) -> Submission {
        Submission {
            id: 1,
            assignment_id: 1,
            student_id: 2,
            content: "答案".to_string(),
            submitted_at,
            score: None,
            feedback: None,
        }
    }

    #[test]
    fn test_on_due_date_evening_not_late() {
        let assignment = assignment_due(NaiveDate::from_ymd_opt(2024, 1, 10));
        let submission =
            submission_at(Utc.with_ymd_and_hms(2024, 1, 10, 23, 59, 58).unwrap());
        assert!(!is_late(&submission, &assignment));
    }

    #[test]
    fn test_just_after_midnight_late() {
        let assignment = assignment_due(NaiveDate::from_ymd_opt(2024, 1, 10));
        let submission = submission_at(Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 1).unwrap());
        assert!(is_late(&submission, &assignment));
    }

    #[test]
    fn test_no_due_date_never_late() {
        let assignment = assignment_due(None);
        let submission = submission_at(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
        assert!(!is_late(&submission, &assignment));
    }
}

use serde::Serialize;
use ts_rs::TS;

use crate::models::submissions::entities::Submission;

/// 提交详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub score: Option<i32>,
    pub feedback: Option<String>,
    pub is_late: bool,
}

impl SubmissionResponse {
    pub fn from_submission(submission: Submission, is_late: bool) -> Self {
        Self {
            id: submission.id,
            assignment_id: submission.assignment_id,
            student_id: submission.student_id,
            content: submission.content,
            submitted_at: submission.submitted_at,
            score: submission.score,
            feedback: submission.feedback,
            is_late,
        }
    }
}

use serde::Deserialize;
use ts_rs::TS;

/// 提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    pub student_id: i64,
    pub assignment_id: i64,
    pub content: String,
}

/// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: i32,
    pub feedback: Option<String>,
}

/// 部分更新提交请求
///
/// 缺省字段保持不变（None 表示不修改）。
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct UpdateSubmissionRequest {
    pub content: Option<String>,
    pub score: Option<i32>,
    pub feedback: Option<String>,
}

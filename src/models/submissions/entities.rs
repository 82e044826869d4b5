use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 提交ID
    pub id: i64,
    // 关联的作业ID
    pub assignment_id: i64,
    // 提交学生ID
    pub student_id: i64,
    // 提交内容
    pub content: String,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 得分（未评分时为空，范围 0..=max_score）
    pub score: Option<i32>,
    // 评语
    pub feedback: Option<String>,
}

impl Submission {
    /// 是否已评分
    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }
}

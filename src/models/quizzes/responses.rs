use serde::Serialize;
use ts_rs::TS;

/// 作答结果响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttemptResponse {
    pub attempt_id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    // 存储的百分比得分
    pub score_percent: i32,
    // 由百分比反推的绝对得分，仅用于展示（见服务层换算说明）
    pub absolute_score: i32,
    pub total_questions: i32,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}

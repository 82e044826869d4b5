use serde::Deserialize;
use ts_rs::TS;

/// 创建课时请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct CreateLessonRequest {
    pub module_id: i64,
    pub title: String,
    pub content: Option<String>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct Lesson {
    // 课时ID
    pub id: i64,
    // 所属模块ID
    pub module_id: i64,
    // 课时标题
    pub title: String,
    // 课时正文
    pub content: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct Module {
    // 模块ID
    pub id: i64,
    // 所属课程ID
    pub course_id: i64,
    // 模块标题
    pub title: String,
    // 课程内位置（从 1 开始，同一课程内稠密无重复）
    pub position: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 作业ID
    pub id: i64,
    // 所属课时ID
    pub lesson_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 满分分值
    pub max_score: i32,
    // 截止日期（日期粒度；当天 23:59:59 前提交不算迟交）
    pub due_date: Option<chrono::NaiveDate>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

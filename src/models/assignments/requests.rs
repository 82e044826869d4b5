use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub lesson_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub max_score: i32,
    pub due_date: Option<NaiveDate>, // ISO 8601 日期，如 "2026-01-24"
}

use serde::Deserialize;
use ts_rs::TS;

/// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i64,
    pub category_id: Option<i64>,
}

use serde::Deserialize;
use ts_rs::TS;

/// 创建模块请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct CreateModuleRequest {
    pub course_id: i64,
    pub title: String,
    /// 显式位置；缺省时追加到课程末尾（现有数量 + 1）
    pub position: Option<i32>,
}

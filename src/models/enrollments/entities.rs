use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课状态
//
// 取消选课直接删除记录，因此没有 canceled 状态。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentStatus {
    Active,    // 在读
    Completed, // 已完成
}

impl EnrollmentStatus {
    pub const ACTIVE: &'static str = "active";
    pub const COMPLETED: &'static str = "completed";

    pub fn all_statuses() -> &'static [&'static EnrollmentStatus] {
        &[&Self::Active, &Self::Completed]
    }
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的选课状态: '{s}'. 支持的状态: active, completed"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "{}", EnrollmentStatus::ACTIVE),
            EnrollmentStatus::Completed => write!(f, "{}", EnrollmentStatus::COMPLETED),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    // 状态令牌识别不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(EnrollmentStatus::Active),
            "completed" => Ok(EnrollmentStatus::Completed),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub status: EnrollmentStatus,
    // 选课日期（日期粒度，不含时间）
    pub enroll_date: chrono::NaiveDate,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

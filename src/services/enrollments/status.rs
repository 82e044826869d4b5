use super::EnrollmentService;
use crate::errors::{LMSystemError, Result};
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};

/// 设置选课状态
///
/// 令牌识别不区分大小写。识别通过后任意状态之间都可以互相设置，
/// 不做状态迁移图校验。
pub async fn set_status(
    service: &EnrollmentService,
    enrollment_id: i64,
    status_token: &str,
) -> Result<Enrollment> {
    let storage = service.storage();

    if storage.get_enrollment_by_id(enrollment_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!(
            "选课记录 {enrollment_id} 不存在"
        )));
    }

    let status: EnrollmentStatus = status_token.parse().map_err(|_| {
        LMSystemError::validation(format!(
            "无效的选课状态 '{status_token}'，支持: active, completed"
        ))
    })?;

    storage
        .update_enrollment_status(enrollment_id, status)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("选课记录 {enrollment_id} 不存在")))
}

/// 标记完成课程
pub async fn complete(service: &EnrollmentService, enrollment_id: i64) -> Result<Enrollment> {
    set_status(service, enrollment_id, EnrollmentStatus::COMPLETED).await
}

use super::EnrollmentService;
use crate::errors::Result;

/// 是否存在选课记录
///
/// 只回答"是否存在记录"，不区分在读还是已完成。
pub async fn is_enrolled(
    service: &EnrollmentService,
    student_id: i64,
    course_id: i64,
) -> Result<bool> {
    Ok(service
        .storage()
        .get_enrollment_by_student_and_course(student_id, course_id)
        .await?
        .is_some())
}

/// 统计课程的在读选课数
pub async fn active_count(service: &EnrollmentService, course_id: i64) -> Result<i64> {
    service.storage().count_active_enrollments(course_id).await
}

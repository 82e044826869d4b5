use tracing::info;

use super::EnrollmentService;
use crate::errors::{LMSystemError, Result};

/// 取消选课
///
/// 直接删除记录；已完成的选课同样可以取消（不做状态守卫）。
/// 取消后再次选课与首次选课无异。
pub async fn cancel(service: &EnrollmentService, enrollment_id: i64) -> Result<()> {
    if !service.storage().delete_enrollment(enrollment_id).await? {
        return Err(LMSystemError::not_found(format!(
            "选课记录 {enrollment_id} 不存在"
        )));
    }

    info!("选课记录 {} 已取消", enrollment_id);
    Ok(())
}

/// 通过 (student, course) 取消选课
pub async fn cancel_by_pair(
    service: &EnrollmentService,
    student_id: i64,
    course_id: i64,
) -> Result<()> {
    if !service
        .storage()
        .delete_enrollment_by_student_and_course(student_id, course_id)
        .await?
    {
        return Err(LMSystemError::not_found(format!(
            "学生 {student_id} 未选修课程 {course_id}"
        )));
    }

    info!("学生 {} 已取消选修课程 {}", student_id, course_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::users::entities::UserRole;
    use crate::services::enrollments::EnrollmentService;
    use crate::storage::Storage;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::Arc;

    async fn setup() -> (EnrollmentService, i64, i64) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let student = storage
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "zhangsan".to_string(),
                role: UserRole::Student,
            })
            .await
            .unwrap();
        let course = storage
            .create_course(crate::models::courses::requests::CreateCourseRequest {
                title: "Rust 入门".to_string(),
                description: None,
                teacher_id: 1,
                category_id: None,
            })
            .await
            .unwrap();
        (EnrollmentService::new(storage), student.id, course.id)
    }

    #[tokio::test]
    async fn test_cancel_by_id() {
        let (service, student_id, course_id) = setup().await;
        let enrollment = service.enroll(student_id, course_id).await.unwrap();

        service.cancel(enrollment.id).await.unwrap();
        assert!(!service.is_enrolled(student_id, course_id).await.unwrap());

        let err = service.cancel(enrollment.id).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_cancel_by_pair_then_reenroll() {
        let (service, student_id, course_id) = setup().await;
        service.enroll(student_id, course_id).await.unwrap();

        service.cancel_by_pair(student_id, course_id).await.unwrap();
        // 取消后重新选课成功
        assert!(service.enroll(student_id, course_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_cancel_completed_enrollment_allowed() {
        let (service, student_id, course_id) = setup().await;
        let enrollment = service.enroll(student_id, course_id).await.unwrap();
        service.complete(enrollment.id).await.unwrap();

        // 已完成的选课没有取消守卫
        assert!(service.cancel(enrollment.id).await.is_ok());
    }
}

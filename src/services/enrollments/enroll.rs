use tracing::info;

use super::EnrollmentService;
use crate::errors::{LMSystemError, Result};
use crate::models::enrollments::entities::Enrollment;

/// 学生选课
///
/// 先做存在性预检提前返回；真正的唯一性保证在存储层的
/// (student, course) 约束，预检通过后插入仍可能返回冲突。
pub async fn enroll(
    service: &EnrollmentService,
    student_id: i64,
    course_id: i64,
) -> Result<Enrollment> {
    let storage = service.storage();

    let student = storage
        .get_user_by_id(student_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("学生 {student_id} 不存在")))?;

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("课程 {course_id} 不存在")));
    }

    if !student.role.is_student() {
        return Err(LMSystemError::validation(format!(
            "用户 {student_id} 的角色为 {}，只有学生可以选课",
            student.role
        )));
    }

    if storage
        .get_enrollment_by_student_and_course(student_id, course_id)
        .await?
        .is_some()
    {
        return Err(LMSystemError::conflict(format!(
            "学生 {student_id} 已选修课程 {course_id}"
        )));
    }

    let today = chrono::Utc::now().date_naive();
    let enrollment = storage
        .create_enrollment(student_id, course_id, today)
        .await?;

    info!(
        "学生 {} 选修课程 {}，选课记录 {}",
        student_id, course_id, enrollment.id
    );
    Ok(enrollment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollments::entities::EnrollmentStatus;
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
        let teacher = storage
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "lilaoshi".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let course = storage
            .create_course(crate::models::courses::requests::CreateCourseRequest {
                title: "Rust 入门".to_string(),
                description: None,
                teacher_id: teacher.id,
                category_id: None,
            })
            .await
            .unwrap();
        (EnrollmentService::new(storage), student.id, course.id)
    }

    #[tokio::test]
    async fn test_enroll_creates_active_enrollment() {
        let (service, student_id, course_id) = setup().await;

        let enrollment = service.enroll(student_id, course_id).await.unwrap();
        assert_eq!(enrollment.status, EnrollmentStatus::Active);
        assert_eq!(enrollment.enroll_date, chrono::Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_enroll_twice_conflicts() {
        let (service, student_id, course_id) = setup().await;

        let first = service.enroll(student_id, course_id).await.unwrap();
        let err = service.enroll(student_id, course_id).await.unwrap_err();
        assert_eq!(err.code(), "E003");

        // 第一条选课记录不受影响
        let stored = service
            .storage()
            .get_enrollment_by_id(first.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, EnrollmentStatus::Active);
    }

    #[tokio::test]
    async fn test_enroll_unknown_student_not_found() {
        let (service, _student_id, course_id) = setup().await;

        let err = service.enroll(9999, course_id).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_enroll_unknown_course_not_found() {
        let (service, student_id, _course_id) = setup().await;

        let err = service.enroll(student_id, 9999).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_enroll_non_student_rejected() {
        let (service, _student_id, course_id) = setup().await;
        let teacher = service
            .storage()
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "wanglaoshi".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();

        let err = service.enroll(teacher.id, course_id).await.unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}

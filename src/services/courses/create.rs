use tracing::info;

use super::CourseService;
use crate::errors::{LMSystemError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::utils::validate_title;

/// 创建课程
pub async fn create_course(service: &CourseService, req: CreateCourseRequest) -> Result<Course> {
    let storage = service.storage();

    let teacher = storage
        .get_user_by_id(req.teacher_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("教师 {} 不存在", req.teacher_id)))?;

    if !teacher.role.is_teacher() {
        return Err(LMSystemError::validation(format!(
            "用户 {} 的角色为 {}，不能开设课程",
            req.teacher_id, teacher.role
        )));
    }

    validate_title(&req.title).map_err(LMSystemError::validation)?;

    let course = storage.create_course(req).await?;
    info!("教师 {} 开设课程 {}", course.teacher_id, course.id);
    Ok(course)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::courses::CourseService;
    use crate::storage::Storage;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::Arc;

    pub(crate) async fn setup() -> (CourseService, i64) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let teacher = storage
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "lilaoshi".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        (CourseService::new(storage), teacher.id)
    }

    fn request(teacher_id: i64) -> CreateCourseRequest {
        CreateCourseRequest {
            title: "Rust 入门".to_string(),
            description: Some("从零开始".to_string()),
            teacher_id,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_course() {
        let (service, teacher_id) = setup().await;

        let course = service.create_course(request(teacher_id)).await.unwrap();
        assert_eq!(course.teacher_id, teacher_id);
        assert_eq!(course.title, "Rust 入门");
    }

    #[tokio::test]
    async fn test_student_cannot_create_course() {
        let (service, _teacher_id) = setup().await;
        let student = service
            .storage()
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "zhangsan".to_string(),
                role: UserRole::Student,
            })
            .await
            .unwrap();

        let err = service.create_course(request(student.id)).await.unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[tokio::test]
    async fn test_unknown_teacher_not_found() {
        let (service, _teacher_id) = setup().await;

        let err = service.create_course(request(9999)).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}

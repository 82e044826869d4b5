use super::CourseService;
use crate::errors::{LMSystemError, Result};
use crate::models::courses::entities::Course;

/// 获取课程详情
pub async fn get_course(service: &CourseService, course_id: i64) -> Result<Course> {
    service
        .storage()
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("课程 {course_id} 不存在")))
}

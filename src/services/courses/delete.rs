use tracing::info;

use super::CourseService;
use crate::errors::{LMSystemError, Result};
use crate::services::modules::delete::delete_module_children;

/// 删除课程
///
/// 自底向上显式级联：每个模块的测验/作答/课时/作业/提交，然后是
/// 模块本身、选课记录，最后才是课程行。任何一层都不依赖存储层的
/// 级联语义。
pub async fn delete_course(service: &CourseService, course_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("课程 {course_id} 不存在")));
    }

    for module in storage.list_modules_by_course(course_id).await? {
        delete_module_children(storage, module.id).await?;
        storage.delete_module(module.id).await?;
    }

    for enrollment in storage.list_enrollments_by_course(course_id).await? {
        storage.delete_enrollment(enrollment.id).await?;
    }

    storage.delete_course(course_id).await?;
    info!("课程 {} 已删除", course_id);
    Ok(())
}

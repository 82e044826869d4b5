use super::ModuleService;
use crate::errors::{LMSystemError, Result};
use crate::models::modules::entities::Module;

/// 按位置列出课程内模块
pub async fn list_modules(service: &ModuleService, course_id: i64) -> Result<Vec<Module>> {
    let storage = service.storage();

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("课程 {course_id} 不存在")));
    }

    storage.list_modules_by_course(course_id).await
}

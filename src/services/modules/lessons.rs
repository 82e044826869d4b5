use tracing::info;

use super::ModuleService;
use crate::errors::{LMSystemError, Result};
use crate::models::lessons::{entities::Lesson, requests::CreateLessonRequest};
use crate::storage::Storage;
use crate::utils::validate_title;

/// 在模块下创建课时
pub async fn add_lesson(service: &ModuleService, req: CreateLessonRequest) -> Result<Lesson> {
    let storage = service.storage();

    if storage.get_module_by_id(req.module_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!(
            "模块 {} 不存在",
            req.module_id
        )));
    }

    validate_title(&req.title).map_err(LMSystemError::validation)?;

    storage.create_lesson(req).await
}

/// 列出模块下的课时
pub async fn list_lessons(service: &ModuleService, module_id: i64) -> Result<Vec<Lesson>> {
    let storage = service.storage();

    if storage.get_module_by_id(module_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("模块 {module_id} 不存在")));
    }

    storage.list_lessons_by_module(module_id).await
}

/// 删除课时（显式级联作业与提交）
pub async fn delete_lesson(service: &ModuleService, lesson_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage.get_lesson_by_id(lesson_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("课时 {lesson_id} 不存在")));
    }

    delete_lesson_children(storage, lesson_id).await?;
    storage.delete_lesson(lesson_id).await?;
    info!("课时 {} 已删除", lesson_id);
    Ok(())
}

/// 删除课时的全部子实体：作业及其提交
///
/// 每一层都逐条显式删除，不依赖存储层的级联语义。
pub(crate) async fn delete_lesson_children(
    storage: &std::sync::Arc<dyn Storage>,
    lesson_id: i64,
) -> Result<()> {
    for assignment in storage.list_assignments_by_lesson(lesson_id).await? {
        for submission in storage
            .list_submissions_by_assignment(assignment.id)
            .await?
        {
            storage.delete_submission(submission.id).await?;
        }
        storage.delete_assignment(assignment.id).await?;
    }
    Ok(())
}

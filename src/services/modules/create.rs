use tracing::info;

use super::ModuleService;
use crate::errors::{LMSystemError, Result};
use crate::models::modules::{entities::Module, requests::CreateModuleRequest};
use crate::utils::validate_title;

/// 创建模块
///
/// 未指定位置时追加到课程末尾；显式位置原样写入，不重排已有模块。
pub async fn create_module(service: &ModuleService, req: CreateModuleRequest) -> Result<Module> {
    let storage = service.storage();

    if storage.get_course_by_id(req.course_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!(
            "课程 {} 不存在",
            req.course_id
        )));
    }

    validate_title(&req.title).map_err(LMSystemError::validation)?;

    let module = storage.create_module(req).await?;
    info!(
        "课程 {} 创建模块 {} @ 位置 {}",
        module.course_id, module.id, module.position
    );
    Ok(module)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::services::modules::ModuleService;
    use crate::storage::Storage;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::Arc;

    pub(crate) async fn setup() -> (ModuleService, i64) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let course = storage
            .create_course(crate::models::courses::requests::CreateCourseRequest {
                title: "Rust 入门".to_string(),
                description: None,
                teacher_id: 1,
                category_id: None,
            })
            .await
            .unwrap();
        (ModuleService::new(storage), course.id)
    }

    pub(crate) async fn add_module(service: &ModuleService, course_id: i64, title: &str) -> Module {
        service
            .create_module(CreateModuleRequest {
                course_id,
                title: title.to_string(),
                position: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_append_gets_next_position() {
        let (service, course_id) = setup().await;

        let first = add_module(&service, course_id, "第一章").await;
        let second = add_module(&service, course_id, "第二章").await;
        assert_eq!(first.position, 1);
        assert_eq!(second.position, 2);
    }

    #[tokio::test]
    async fn test_explicit_position_stored_verbatim() {
        let (service, course_id) = setup().await;
        add_module(&service, course_id, "第一章").await;

        let module = service
            .create_module(CreateModuleRequest {
                course_id,
                title: "插队章节".to_string(),
                position: Some(1),
            })
            .await
            .unwrap();
        // 显式位置不触发已有模块重排
        assert_eq!(module.position, 1);
    }

    #[tokio::test]
    async fn test_unknown_course_not_found() {
        let (service, _course_id) = setup().await;

        let err = service
            .create_module(CreateModuleRequest {
                course_id: 9999,
                title: "第一章".to_string(),
                position: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let (service, course_id) = setup().await;

        let err = service
            .create_module(CreateModuleRequest {
                course_id,
                title: "   ".to_string(),
                position: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}

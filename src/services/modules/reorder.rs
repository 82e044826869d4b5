use tracing::info;

use super::ModuleService;
use crate::errors::{LMSystemError, Result};
use crate::models::modules::entities::Module;

/// 移动单个模块到新位置
///
/// 目标位置收敛到 [1, n]。整个读改写在存储层按课程串行执行，
/// 成功后课程内位置重排为 1..n。
pub async fn move_module(
    service: &ModuleService,
    module_id: i64,
    new_position: i32,
) -> Result<Vec<Module>> {
    let storage = service.storage();

    if storage.get_module_by_id(module_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("模块 {module_id} 不存在")));
    }

    let modules = storage.move_module(module_id, new_position).await?;
    info!("模块 {} 移动到位置 {}", module_id, new_position);
    Ok(modules)
}

/// 按给定顺序重排课程内全部模块
///
/// ID 列表长度不符、包含不属于该课程的ID（含混入其他课程的ID）
/// 都作为校验错误整体拒绝，不做部分生效。
pub async fn reorder_modules(
    service: &ModuleService,
    course_id: i64,
    ordered_ids: &[i64],
) -> Result<Vec<Module>> {
    let storage = service.storage();

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("课程 {course_id} 不存在")));
    }

    let modules = storage.reorder_modules(course_id, ordered_ids).await?;
    info!("课程 {} 重排 {} 个模块", course_id, modules.len());
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use crate::services::modules::create::tests::{add_module, setup};

    fn titles(modules: &[crate::models::modules::entities::Module]) -> Vec<String> {
        modules.iter().map(|m| m.title.clone()).collect()
    }

    fn positions(modules: &[crate::models::modules::entities::Module]) -> Vec<i32> {
        modules.iter().map(|m| m.position).collect()
    }

    #[tokio::test]
    async fn test_move_to_front() {
        let (service, course_id) = setup().await;
        let _a = add_module(&service, course_id, "A").await;
        let b = add_module(&service, course_id, "B").await;
        let _c = add_module(&service, course_id, "C").await;

        // [A@1, B@2, C@3] 中把 B 移到 1 → [B@1, A@2, C@3]
        let modules = service.move_module(b.id, 1).await.unwrap();
        assert_eq!(titles(&modules), vec!["B", "A", "C"]);
        assert_eq!(positions(&modules), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reorder_full_permutation() {
        let (service, course_id) = setup().await;
        let a = add_module(&service, course_id, "A").await;
        let b = add_module(&service, course_id, "B").await;
        let c = add_module(&service, course_id, "C").await;

        let modules = service
            .reorder_modules(course_id, &[c.id, a.id, b.id])
            .await
            .unwrap();
        assert_eq!(titles(&modules), vec!["C", "A", "B"]);
        assert_eq!(positions(&modules), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reorder_missing_id_fails_without_changes() {
        let (service, course_id) = setup().await;
        let a = add_module(&service, course_id, "A").await;
        let _b = add_module(&service, course_id, "B").await;

        let err = service
            .reorder_modules(course_id, &[a.id])
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");

        let modules = service.list_modules(course_id).await.unwrap();
        assert_eq!(positions(&modules), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_move_missing_module_not_found() {
        let (service, _course_id) = setup().await;

        let err = service.move_module(9999, 1).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[tokio::test]
    async fn test_sequences_keep_dense_positions() {
        let (service, course_id) = setup().await;
        let a = add_module(&service, course_id, "A").await;
        let b = add_module(&service, course_id, "B").await;
        let c = add_module(&service, course_id, "C").await;
        let d = add_module(&service, course_id, "D").await;

        service.move_module(d.id, 2).await.unwrap();
        service
            .reorder_modules(course_id, &[b.id, c.id, a.id, d.id])
            .await
            .unwrap();
        service.move_module(a.id, 99).await.unwrap();

        // 任意操作序列后位置仍是 1..n 的稠密排列
        let modules = service.list_modules(course_id).await.unwrap();
        assert_eq!(positions(&modules), vec![1, 2, 3, 4]);
    }
}

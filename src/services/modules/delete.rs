use tracing::info;

use super::ModuleService;
use super::lessons::delete_lesson_children;
use crate::errors::{LMSystemError, Result};
use crate::storage::Storage;

/// 删除模块
///
/// 显式级联：测验与作答记录、课时及其作业与提交。删除后课程内
/// 剩余模块的位置重排为 1..n。
pub async fn delete_module(service: &ModuleService, module_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage.get_module_by_id(module_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("模块 {module_id} 不存在")));
    }

    delete_module_children(storage, module_id).await?;
    storage.delete_module(module_id).await?;
    info!("模块 {} 已删除", module_id);
    Ok(())
}

/// 删除模块的全部子实体：测验（含作答记录）与课时（含作业、提交）
pub(crate) async fn delete_module_children(
    storage: &std::sync::Arc<dyn Storage>,
    module_id: i64,
) -> Result<()> {
    if let Some(quiz) = storage.get_quiz_by_module(module_id).await? {
        for attempt in storage.list_quiz_attempts_by_quiz(quiz.id).await? {
            storage.delete_quiz_attempt(attempt.id).await?;
        }
        storage.delete_quiz(quiz.id).await?;
    }

    for lesson in storage.list_lessons_by_module(module_id).await? {
        delete_lesson_children(storage, lesson.id).await?;
        storage.delete_lesson(lesson.id).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::lessons::requests::CreateLessonRequest;
    use crate::services::modules::create::tests::{add_module, setup};

    #[tokio::test]
    async fn test_delete_module_renumbers_and_cascades() {
        let (service, course_id) = setup().await;
        let _a = add_module(&service, course_id, "A").await;
        let b = add_module(&service, course_id, "B").await;
        let _c = add_module(&service, course_id, "C").await;

        let storage = service.storage();

        // B 下挂一个测验和一个课时
        let quiz = storage
            .create_quiz(crate::models::quizzes::requests::CreateQuizRequest {
                module_id: b.id,
                title: "测验".to_string(),
                time_limit_minutes: None,
                questions: vec![crate::models::quizzes::requests::CreateQuestionRequest {
                    text: "1 + 1 = ?".to_string(),
                    question_type: crate::models::quizzes::entities::QuestionType::SingleChoice,
                    options: vec![crate::models::quizzes::requests::CreateAnswerOptionRequest {
                        text: "2".to_string(),
                        is_correct: true,
                    }],
                }],
            })
            .await
            .unwrap();
        storage.create_quiz_attempt(quiz.id, 1, 100).await.unwrap();
        let lesson = service
            .add_lesson(CreateLessonRequest {
                module_id: b.id,
                title: "课时一".to_string(),
                content: None,
            })
            .await
            .unwrap();

        service.delete_module(b.id).await.unwrap();

        // 子实体全部删除
        assert!(storage.get_quiz_by_id(quiz.id).await.unwrap().is_none());
        assert!(
            storage
                .list_quiz_attempts_by_quiz(quiz.id)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(storage.get_lesson_by_id(lesson.id).await.unwrap().is_none());

        // 剩余模块位置重排为 1..n
        let modules = service.list_modules(course_id).await.unwrap();
        let positions: Vec<i32> = modules.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_missing_module_not_found() {
        let (service, _course_id) = setup().await;

        let err = service.delete_module(9999).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}

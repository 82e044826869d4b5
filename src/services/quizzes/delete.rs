use tracing::info;

use super::QuizService;
use crate::errors::{LMSystemError, Result};

/// 删除测验
///
/// 作答记录逐条显式删除，不依赖存储层的级联语义。
pub async fn delete_quiz(service: &QuizService, quiz_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage.get_quiz_by_id(quiz_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!("测验 {quiz_id} 不存在")));
    }

    let attempts = storage.list_quiz_attempts_by_quiz(quiz_id).await?;
    let attempt_count = attempts.len();
    for attempt in attempts {
        storage.delete_quiz_attempt(attempt.id).await?;
    }

    storage.delete_quiz(quiz_id).await?;
    info!("测验 {} 已删除，连带 {} 条作答记录", quiz_id, attempt_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::models::users::entities::UserRole;
    use crate::services::quizzes::create::tests::{quiz_request, setup};

    #[tokio::test]
    async fn test_delete_quiz_removes_attempts() {
        let (service, module_id) = setup().await;
        let quiz = service.create_quiz(quiz_request(module_id, 2)).await.unwrap();
        let student = service
            .storage()
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "zhangsan".to_string(),
                role: UserRole::Student,
            })
            .await
            .unwrap();
        service
            .take_quiz(student.id, quiz.id, HashMap::new())
            .await
            .unwrap();

        service.delete_quiz(quiz.id).await.unwrap();

        assert!(service.get_quiz(quiz.id).await.is_err());
        assert!(service.list_attempts(quiz.id).await.unwrap().is_empty());

        // 模块空出后可重新创建测验
        assert!(service.create_quiz(quiz_request(module_id, 1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_quiz_not_found() {
        let (service, _module_id) = setup().await;

        let err = service.delete_quiz(9999).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}

use super::QuizService;
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::entities::{Quiz, QuizAttempt};

/// 获取测验详情
pub async fn get_quiz(service: &QuizService, quiz_id: i64) -> Result<Quiz> {
    service
        .storage()
        .get_quiz_by_id(quiz_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("测验 {quiz_id} 不存在")))
}

/// 获取某学生的作答记录
pub async fn get_attempt(
    service: &QuizService,
    quiz_id: i64,
    student_id: i64,
) -> Result<QuizAttempt> {
    service
        .storage()
        .get_quiz_attempt_by_quiz_and_student(quiz_id, student_id)
        .await?
        .ok_or_else(|| {
            LMSystemError::not_found(format!("学生 {student_id} 没有测验 {quiz_id} 的作答记录"))
        })
}

/// 列出测验的全部作答记录
pub async fn list_attempts(service: &QuizService, quiz_id: i64) -> Result<Vec<QuizAttempt>> {
    service.storage().list_quiz_attempts_by_quiz(quiz_id).await
}

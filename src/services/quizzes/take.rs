use std::collections::HashMap;

use tracing::info;

use super::QuizService;
use super::scoring::{absolute_score, count_correct, score_percentage};
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::responses::QuizAttemptResponse;

/// 学生作答
///
/// 存储的是截断除法得到的百分比；响应中的绝对分由百分比再截断反推，
/// 与原始答对数可能相差 1（双重截断），为兼容存量数据刻意保留。
pub async fn take_quiz(
    service: &QuizService,
    student_id: i64,
    quiz_id: i64,
    answers: HashMap<i64, i64>,
) -> Result<QuizAttemptResponse> {
    let storage = service.storage();

    let student = storage
        .get_user_by_id(student_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("学生 {student_id} 不存在")))?;

    let quiz = storage
        .get_quiz_by_id(quiz_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("测验 {quiz_id} 不存在")))?;

    if !student.role.is_student() {
        return Err(LMSystemError::validation(format!(
            "用户 {student_id} 的角色为 {}，只有学生可以作答",
            student.role
        )));
    }

    let total_questions = quiz.questions.len() as i32;
    if total_questions == 0 {
        return Err(LMSystemError::validation(format!(
            "测验 {quiz_id} 没有题目，无法作答"
        )));
    }

    if storage
        .get_quiz_attempt_by_quiz_and_student(quiz_id, student_id)
        .await?
        .is_some()
    {
        return Err(LMSystemError::conflict(format!(
            "学生 {student_id} 已作答过测验 {quiz_id}"
        )));
    }

    let correct = count_correct(&quiz, &answers);
    let score_percent = score_percentage(correct, total_questions);

    let attempt = storage
        .create_quiz_attempt(quiz_id, student_id, score_percent)
        .await?;

    info!(
        "学生 {} 作答测验 {}：{}/{} 题正确，得分 {}%",
        student_id, quiz_id, correct, total_questions, score_percent
    );

    Ok(QuizAttemptResponse {
        attempt_id: attempt.id,
        quiz_id,
        student_id,
        score_percent,
        absolute_score: absolute_score(score_percent, total_questions),
        total_questions,
        taken_at: attempt.taken_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::quizzes::create::tests::{quiz_request, setup};

    async fn setup_with_student(questions: usize) -> (crate::services::QuizService, i64, i64) {
        let (service, module_id) = setup().await;
        let quiz = service.create_quiz(quiz_request(module_id, questions)).await.unwrap();
        let student = service
            .storage()
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "zhangsan".to_string(),
                role: UserRole::Student,
            })
            .await
            .unwrap();
        (service, quiz.id, student.id)
    }

    /// 每题第一个选项为正确答案；取前 correct 题的正确选项作答
    async fn correct_answers(
        service: &crate::services::QuizService,
        quiz_id: i64,
        correct: usize,
    ) -> HashMap<i64, i64> {
        let quiz = service.get_quiz(quiz_id).await.unwrap();
        quiz.questions
            .iter()
            .take(correct)
            .map(|q| (q.id, q.options[0].id))
            .collect()
    }

    #[tokio::test]
    async fn test_two_of_three_truncates_to_66() {
        let (service, quiz_id, student_id) = setup_with_student(3).await;
        let answers = correct_answers(&service, quiz_id, 2).await;

        let result = service.take_quiz(student_id, quiz_id, answers).await.unwrap();
        assert_eq!(result.score_percent, 66);
        // 66% 反推出的绝对分是 1，双重截断损失是既定行为
        assert_eq!(result.absolute_score, 1);
        assert_eq!(result.total_questions, 3);

        let stored = service.get_attempt(quiz_id, student_id).await.unwrap();
        assert_eq!(stored.score_percent, 66);
    }

    #[tokio::test]
    async fn test_empty_answers_score_zero() {
        let (service, quiz_id, student_id) = setup_with_student(3).await;

        let result = service
            .take_quiz(student_id, quiz_id, HashMap::new())
            .await
            .unwrap();
        assert_eq!(result.score_percent, 0);
        assert_eq!(result.absolute_score, 0);
    }

    #[tokio::test]
    async fn test_full_marks() {
        let (service, quiz_id, student_id) = setup_with_student(4).await;
        let answers = correct_answers(&service, quiz_id, 4).await;

        let result = service.take_quiz(student_id, quiz_id, answers).await.unwrap();
        assert_eq!(result.score_percent, 100);
        assert_eq!(result.absolute_score, 4);
    }

    #[tokio::test]
    async fn test_second_attempt_conflicts() {
        let (service, quiz_id, student_id) = setup_with_student(3).await;
        let answers = correct_answers(&service, quiz_id, 3).await;

        service
            .take_quiz(student_id, quiz_id, answers.clone())
            .await
            .unwrap();
        let err = service
            .take_quiz(student_id, quiz_id, answers)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E003");

        // 第一次的成绩不受影响
        let stored = service.get_attempt(quiz_id, student_id).await.unwrap();
        assert_eq!(stored.score_percent, 100);
    }

    #[tokio::test]
    async fn test_foreign_option_ignored() {
        let (service, quiz_id, student_id) = setup_with_student(2).await;
        let quiz = service.get_quiz(quiz_id).await.unwrap();

        // 题 1 填了题 2 的正确选项ID，不得分也不报错
        let answers = HashMap::from([(quiz.questions[0].id, quiz.questions[1].options[0].id)]);
        let result = service.take_quiz(student_id, quiz_id, answers).await.unwrap();
        assert_eq!(result.score_percent, 0);
    }

    #[tokio::test]
    async fn test_non_student_rejected() {
        let (service, quiz_id, _student_id) = setup_with_student(3).await;
        let teacher = service
            .storage()
            .create_user(crate::models::users::requests::CreateUserRequest {
                username: "lilaoshi".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();

        let err = service
            .take_quiz(teacher.id, quiz_id, HashMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[tokio::test]
    async fn test_unknown_quiz_not_found() {
        let (service, _quiz_id, student_id) = setup_with_student(1).await;

        let err = service
            .take_quiz(student_id, 9999, HashMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}

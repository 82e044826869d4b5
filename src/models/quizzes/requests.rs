use serde::Deserialize;
use ts_rs::TS;

use crate::models::quizzes::entities::QuestionType;

/// 创建测验请求
///
/// 题目与选项随测验一次性创建。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuizRequest {
    pub module_id: i64,
    pub title: String,
    pub time_limit_minutes: Option<i32>,
    pub questions: Vec<CreateQuestionRequest>,
}

/// 创建题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuestionRequest {
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<CreateAnswerOptionRequest>,
}

/// 创建备选答案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateAnswerOptionRequest {
    pub text: String,
    pub is_correct: bool,
}

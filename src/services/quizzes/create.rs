use tracing::{info, warn};

use super::QuizService;
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::{
    entities::{Quiz, QuestionType},
    requests::CreateQuizRequest,
};
use crate::utils::validate_title;

/// 创建测验
///
/// 题目与选项随测验一次性写入，之后不可单独追加。一个模块至多
/// 一个测验，预检之外由存储层的 module 唯一索引兜底。
pub async fn create_quiz(service: &QuizService, req: CreateQuizRequest) -> Result<Quiz> {
    let storage = service.storage();

    if storage.get_module_by_id(req.module_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!(
            "模块 {} 不存在",
            req.module_id
        )));
    }

    validate_title(&req.title).map_err(LMSystemError::validation)?;

    if req.questions.is_empty() {
        return Err(LMSystemError::validation("测验至少需要一道题目"));
    }

    for (index, question) in req.questions.iter().enumerate() {
        if question.text.trim().is_empty() {
            return Err(LMSystemError::validation(format!(
                "第 {} 题题干为空",
                index + 1
            )));
        }
        if question.options.is_empty() {
            return Err(LMSystemError::validation(format!(
                "第 {} 题没有备选答案",
                index + 1
            )));
        }

        // 单选题正确选项数不在写入时强制，但数据问题要留痕
        if question.question_type == QuestionType::SingleChoice {
            let correct_count = question.options.iter().filter(|o| o.is_correct).count();
            if correct_count != 1 {
                warn!(
                    "单选题 '{}' 有 {} 个正确选项，计分时可能产生意外结果",
                    question.text, correct_count
                );
            }
        }
    }

    if storage.get_quiz_by_module(req.module_id).await?.is_some() {
        return Err(LMSystemError::conflict(format!(
            "模块 {} 已存在测验",
            req.module_id
        )));
    }

    let quiz = storage.create_quiz(req).await?;
    info!(
        "模块 {} 创建测验 {}，共 {} 题",
        quiz.module_id,
        quiz.id,
        quiz.questions.len()
    );
    Ok(quiz)
}

//! 测验存储操作
//!
//! 题目与选项作为测验聚合的一部分一次性写入；module_id 唯一索引保证
//! 一个模块至多一个测验。

use dashmap::mapref::entry::Entry;

use super::MemoryStorage;
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::{
    entities::{AnswerOption, Question, Quiz},
    requests::CreateQuizRequest,
};

impl MemoryStorage {
    /// 创建测验（含题目与选项）
    pub async fn create_quiz_impl(&self, quiz: CreateQuizRequest) -> Result<Quiz> {
        let questions: Vec<Question> = quiz
            .questions
            .into_iter()
            .map(|question| Question {
                id: self.next_id(),
                text: question.text,
                question_type: question.question_type,
                options: question
                    .options
                    .into_iter()
                    .map(|option| AnswerOption {
                        id: self.next_id(),
                        text: option.text,
                        is_correct: option.is_correct,
                    })
                    .collect(),
            })
            .collect();

        let record = Quiz {
            id: self.next_id(),
            module_id: quiz.module_id,
            title: quiz.title,
            time_limit_minutes: quiz.time_limit_minutes,
            questions,
            created_at: chrono::Utc::now(),
        };

        match self.quiz_module_index.entry(quiz.module_id) {
            Entry::Occupied(_) => Err(LMSystemError::conflict(format!(
                "模块 {} 已存在测验",
                quiz.module_id
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(record.id);
                self.quizzes.insert(record.id, record.clone());
                Ok(record)
            }
        }
    }

    /// 通过ID获取测验
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        Ok(self.quizzes.get(&quiz_id).map(|q| q.clone()))
    }

    /// 通过模块ID获取测验
    pub async fn get_quiz_by_module_impl(&self, module_id: i64) -> Result<Option<Quiz>> {
        let quiz_id = match self.quiz_module_index.get(&module_id) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.quizzes.get(&quiz_id).map(|q| q.clone()))
    }

    /// 删除测验
    ///
    /// 作答记录由服务层显式清理。
    pub async fn delete_quiz_impl(&self, quiz_id: i64) -> Result<bool> {
        match self.quizzes.remove(&quiz_id) {
            Some((_, quiz)) => {
                self.quiz_module_index.remove(&quiz.module_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quizzes::entities::QuestionType;
    use crate::models::quizzes::requests::{CreateAnswerOptionRequest, CreateQuestionRequest};

    fn quiz_request(module_id: i64) -> CreateQuizRequest {
        CreateQuizRequest {
            module_id,
            title: "第一章测验".to_string(),
            time_limit_minutes: Some(15),
            questions: vec![CreateQuestionRequest {
                text: "1 + 1 = ?".to_string(),
                question_type: QuestionType::SingleChoice,
                options: vec![
                    CreateAnswerOptionRequest {
                        text: "2".to_string(),
                        is_correct: true,
                    },
                    CreateAnswerOptionRequest {
                        text: "3".to_string(),
                        is_correct: false,
                    },
                ],
            }],
        }
    }

    #[tokio::test]
    async fn test_one_quiz_per_module() {
        let storage = MemoryStorage::new();

        storage.create_quiz_impl(quiz_request(5)).await.unwrap();
        let err = storage.create_quiz_impl(quiz_request(5)).await.unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[tokio::test]
    async fn test_delete_quiz_frees_module_slot() {
        let storage = MemoryStorage::new();

        let quiz = storage.create_quiz_impl(quiz_request(5)).await.unwrap();
        assert!(storage.delete_quiz_impl(quiz.id).await.unwrap());

        // 删除后模块可以重新挂测验
        assert!(storage.create_quiz_impl(quiz_request(5)).await.is_ok());
    }

    #[tokio::test]
    async fn test_question_and_option_ids_assigned() {
        let storage = MemoryStorage::new();

        let quiz = storage.create_quiz_impl(quiz_request(5)).await.unwrap();
        let question = &quiz.questions[0];
        assert!(question.id > 0);
        assert_eq!(question.options.len(), 2);
        assert_ne!(question.options[0].id, question.options[1].id);
    }
}

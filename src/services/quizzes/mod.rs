pub mod create;
pub mod delete;
pub mod query;
pub mod scoring;
pub mod take;

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::quizzes::{
    entities::{Quiz, QuizAttempt},
    requests::CreateQuizRequest,
    responses::QuizAttemptResponse,
};
use crate::storage::Storage;

pub use scoring::count_correct;

pub struct QuizService {
    storage: Arc<dyn Storage>,
}

impl QuizService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建测验（题目与选项一次性创建）
    pub async fn create_quiz(&self, req: CreateQuizRequest) -> Result<Quiz> {
        create::create_quiz(self, req).await
    }

    /// 获取测验详情
    pub async fn get_quiz(&self, quiz_id: i64) -> Result<Quiz> {
        query::get_quiz(self, quiz_id).await
    }

    /// 学生作答（每个学生对每个测验至多一次）
    pub async fn take_quiz(
        &self,
        student_id: i64,
        quiz_id: i64,
        answers: HashMap<i64, i64>,
    ) -> Result<QuizAttemptResponse> {
        take::take_quiz(self, student_id, quiz_id, answers).await
    }

    /// 获取某学生的作答记录
    pub async fn get_attempt(&self, quiz_id: i64, student_id: i64) -> Result<QuizAttempt> {
        query::get_attempt(self, quiz_id, student_id).await
    }

    /// 列出测验的全部作答记录
    pub async fn list_attempts(&self, quiz_id: i64) -> Result<Vec<QuizAttempt>> {
        query::list_attempts(self, quiz_id).await
    }

    /// 删除测验（显式级联删除作答记录）
    pub async fn delete_quiz(&self, quiz_id: i64) -> Result<()> {
        delete::delete_quiz(self, quiz_id).await
    }
}

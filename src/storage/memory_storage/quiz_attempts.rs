//! 作答记录存储操作
//!
//! (quiz_id, student_id) 唯一索引保证每个学生对每个测验至多一次作答。

use dashmap::mapref::entry::Entry;

use super::MemoryStorage;
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::entities::QuizAttempt;

impl MemoryStorage {
    /// 创建作答记录
    pub async fn create_quiz_attempt_impl(
        &self,
        quiz_id: i64,
        student_id: i64,
        score_percent: i32,
    ) -> Result<QuizAttempt> {
        let record = QuizAttempt {
            id: self.next_id(),
            quiz_id,
            student_id,
            score_percent,
            taken_at: chrono::Utc::now(),
        };

        match self.attempt_index.entry((quiz_id, student_id)) {
            Entry::Occupied(_) => Err(LMSystemError::conflict(format!(
                "学生 {student_id} 已作答过测验 {quiz_id}"
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(record.id);
                self.quiz_attempts.insert(record.id, record.clone());
                Ok(record)
            }
        }
    }

    /// 通过 (quiz, student) 获取作答记录
    pub async fn get_quiz_attempt_by_quiz_and_student_impl(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<Option<QuizAttempt>> {
        let attempt_id = match self.attempt_index.get(&(quiz_id, student_id)) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.quiz_attempts.get(&attempt_id).map(|a| a.clone()))
    }

    /// 列出测验的全部作答记录
    pub async fn list_quiz_attempts_by_quiz_impl(&self, quiz_id: i64) -> Result<Vec<QuizAttempt>> {
        let mut attempts: Vec<QuizAttempt> = self
            .quiz_attempts
            .iter()
            .filter(|entry| entry.quiz_id == quiz_id)
            .map(|entry| entry.clone())
            .collect();
        attempts.sort_by_key(|a| a.id);
        Ok(attempts)
    }

    /// 删除作答记录
    pub async fn delete_quiz_attempt_impl(&self, attempt_id: i64) -> Result<bool> {
        match self.quiz_attempts.remove(&attempt_id) {
            Some((_, attempt)) => {
                self.attempt_index
                    .remove(&(attempt.quiz_id, attempt.student_id));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

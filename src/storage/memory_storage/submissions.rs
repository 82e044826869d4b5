//! 提交存储操作
//!
//! (assignment_id, student_id) 唯一索引与选课同理，在插入时原子生效。

use dashmap::mapref::entry::Entry;

use super::MemoryStorage;
use crate::errors::{LMSystemError, Result};
use crate::models::submissions::{
    entities::Submission,
    requests::{SubmitAssignmentRequest, UpdateSubmissionRequest},
};

impl MemoryStorage {
    /// 创建提交
    pub async fn create_submission_impl(
        &self,
        submission: SubmitAssignmentRequest,
    ) -> Result<Submission> {
        let record = Submission {
            id: self.next_id(),
            assignment_id: submission.assignment_id,
            student_id: submission.student_id,
            content: submission.content,
            submitted_at: chrono::Utc::now(),
            score: None,
            feedback: None,
        };

        match self
            .submission_index
            .entry((submission.assignment_id, submission.student_id))
        {
            Entry::Occupied(_) => Err(LMSystemError::conflict(format!(
                "学生 {} 已提交过作业 {}",
                submission.student_id, submission.assignment_id
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(record.id);
                self.submissions.insert(record.id, record.clone());
                Ok(record)
            }
        }
    }

    /// 通过ID获取提交信息
    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        Ok(self.submissions.get(&submission_id).map(|s| s.clone()))
    }

    /// 通过 (assignment, student) 获取提交信息
    pub async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let submission_id = match self.submission_index.get(&(assignment_id, student_id)) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.submissions.get(&submission_id).map(|s| s.clone()))
    }

    /// 写入评分与评语
    ///
    /// 两个字段无条件覆盖，重复评分为后写生效。
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        score: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        match self.submissions.get_mut(&submission_id) {
            Some(mut submission) => {
                submission.score = Some(score);
                submission.feedback = feedback;
                Ok(Some(submission.clone()))
            }
            None => Ok(None),
        }
    }

    /// 部分更新提交（None 字段保持不变）
    pub async fn update_submission_impl(
        &self,
        submission_id: i64,
        update: UpdateSubmissionRequest,
    ) -> Result<Option<Submission>> {
        match self.submissions.get_mut(&submission_id) {
            Some(mut submission) => {
                if let Some(content) = update.content {
                    submission.content = content;
                }
                if let Some(score) = update.score {
                    submission.score = Some(score);
                }
                if let Some(feedback) = update.feedback {
                    submission.feedback = Some(feedback);
                }
                Ok(Some(submission.clone()))
            }
            None => Ok(None),
        }
    }

    /// 列出全部未评分提交
    pub async fn list_ungraded_submissions_impl(&self) -> Result<Vec<Submission>> {
        let mut submissions: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|entry| entry.score.is_none())
            .map(|entry| entry.clone())
            .collect();
        submissions.sort_by_key(|s| s.id);
        Ok(submissions)
    }

    /// 列出作业下的提交
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let mut submissions: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|entry| entry.assignment_id == assignment_id)
            .map(|entry| entry.clone())
            .collect();
        submissions.sort_by_key(|s| s.id);
        Ok(submissions)
    }

    /// 删除提交
    pub async fn delete_submission_impl(&self, submission_id: i64) -> Result<bool> {
        match self.submissions.remove(&submission_id) {
            Some((_, submission)) => {
                self.submission_index
                    .remove(&(submission.assignment_id, submission.student_id));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

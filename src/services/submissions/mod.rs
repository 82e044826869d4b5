pub mod grade;
pub mod late;
pub mod query;
pub mod submit;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::{
    entities::Submission,
    requests::{GradeSubmissionRequest, SubmitAssignmentRequest, UpdateSubmissionRequest},
    responses::SubmissionResponse,
};
use crate::storage::Storage;

pub use late::is_late;

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 提交作业
    pub async fn submit(&self, req: SubmitAssignmentRequest) -> Result<Submission> {
        submit::submit(self, req).await
    }

    /// 评分
    pub async fn grade(
        &self,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Submission> {
        grade::grade(self, submission_id, req).await
    }

    /// 部分更新提交
    pub async fn update(
        &self,
        submission_id: i64,
        req: UpdateSubmissionRequest,
    ) -> Result<Submission> {
        update::update(self, submission_id, req).await
    }

    /// 获取提交详情（含迟交标记）
    pub async fn get_submission(&self, submission_id: i64) -> Result<SubmissionResponse> {
        query::get_submission(self, submission_id).await
    }

    /// 列出全部未评分提交
    pub async fn list_ungraded(&self) -> Result<Vec<Submission>> {
        query::list_ungraded(self).await
    }
}

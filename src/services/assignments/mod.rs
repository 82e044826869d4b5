pub mod create;
pub mod delete;
pub mod detail;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 在课时下创建作业
    pub async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        create::create_assignment(self, req).await
    }

    /// 获取作业详情
    pub async fn get_assignment(&self, assignment_id: i64) -> Result<Assignment> {
        detail::get_assignment(self, assignment_id).await
    }

    /// 删除作业（显式级联提交记录）
    pub async fn delete_assignment(&self, assignment_id: i64) -> Result<()> {
        delete::delete_assignment(self, assignment_id).await
    }
}

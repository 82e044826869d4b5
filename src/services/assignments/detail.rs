use super::AssignmentService;
use crate::errors::{LMSystemError, Result};
use crate::models::assignments::entities::Assignment;

/// 获取作业详情
pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<Assignment> {
    service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("作业 {assignment_id} 不存在")))
}

use tracing::info;

use super::AssignmentService;
use crate::errors::{LMSystemError, Result};
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::utils::validate_title;

/// 在课时下创建作业
pub async fn create_assignment(
    service: &AssignmentService,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let storage = service.storage();

    if storage.get_lesson_by_id(req.lesson_id).await?.is_none() {
        return Err(LMSystemError::not_found(format!(
            "课时 {} 不存在",
            req.lesson_id
        )));
    }

    validate_title(&req.title).map_err(LMSystemError::validation)?;

    if req.max_score < 0 {
        return Err(LMSystemError::validation(format!(
            "满分分值 {} 不能为负",
            req.max_score
        )));
    }

    let assignment = storage.create_assignment(req).await?;
    info!(
        "课时 {} 创建作业 {}，满分 {}",
        assignment.lesson_id, assignment.id, assignment.max_score
    );
    Ok(assignment)
}

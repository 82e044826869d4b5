use tracing::info;

use super::SubmissionService;
use crate::errors::{LMSystemError, Result};
use crate::models::submissions::{entities::Submission, requests::SubmitAssignmentRequest};
use crate::utils::validate_content;

/// 提交作业
///
/// 截止日期严格早于今天时拒绝；截止当天仍可提交。唯一性预检之外，
/// 存储层的 (assignment, student) 约束兜底并发重复提交。
pub async fn submit(service: &SubmissionService, req: SubmitAssignmentRequest) -> Result<Submission> {
    let storage = service.storage();

    let student = storage
        .get_user_by_id(req.student_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("学生 {} 不存在", req.student_id)))?;

    let assignment = storage
        .get_assignment_by_id(req.assignment_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("作业 {} 不存在", req.assignment_id)))?;

    if !student.role.is_student() {
        return Err(LMSystemError::validation(format!(
            "用户 {} 的角色为 {}，只有学生可以提交作业",
            req.student_id, student.role
        )));
    }

    validate_content(&req.content).map_err(LMSystemError::validation)?;

    let today = chrono::Utc::now().date_naive();
    if let Some(due_date) = assignment.due_date
        && due_date < today
    {
        return Err(LMSystemError::validation(format!(
            "作业 {} 的截止日期 {due_date} 已过",
            assignment.id
        )));
    }

    if storage
        .get_submission_by_assignment_and_student(req.assignment_id, req.student_id)
        .await?
        .is_some()
    {
        return Err(LMSystemError::conflict(format!(
            "学生 {} 已提交过作业 {}",
            req.student_id, req.assignment_id
        )));
    }

    let submission = storage.create_submission(req).await?;
    info!(
        "学生 {} 提交作业 {}，提交记录 {}",
        submission.student_id, submission.assignment_id, submission.id
    );
    Ok(submission)
}

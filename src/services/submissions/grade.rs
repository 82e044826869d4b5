use tracing::info;

use super::SubmissionService;
use crate::errors::{LMSystemError, Result};
use crate::models::submissions::{entities::Submission, requests::GradeSubmissionRequest};

/// 评分
///
/// 得分必须落在 [0, max_score]。分数与评语无条件覆盖，不保留历史
/// 评分记录；并发评分为后写生效。
pub async fn grade(
    service: &SubmissionService,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> Result<Submission> {
    let storage = service.storage();

    let submission = storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("提交 {submission_id} 不存在")))?;

    let assignment = storage
        .get_assignment_by_id(submission.assignment_id)
        .await?
        .ok_or_else(|| {
            LMSystemError::not_found(format!("作业 {} 不存在", submission.assignment_id))
        })?;

    if req.score < 0 || req.score > assignment.max_score {
        return Err(LMSystemError::validation(format!(
            "得分 {} 超出范围 [0, {}]",
            req.score, assignment.max_score
        )));
    }

    let graded = storage
        .grade_submission(submission_id, req.score, req.feedback)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("提交 {submission_id} 不存在")))?;

    info!("提交 {} 评分 {}/{}", submission_id, req.score, assignment.max_score);
    Ok(graded)
}

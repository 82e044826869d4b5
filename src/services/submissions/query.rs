use super::SubmissionService;
use super::late::is_late;
use crate::errors::{LMSystemError, Result};
use crate::models::submissions::{entities::Submission, responses::SubmissionResponse};

/// 获取提交详情（含迟交标记）
pub async fn get_submission(
    service: &SubmissionService,
    submission_id: i64,
) -> Result<SubmissionResponse> {
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

    let late = is_late(&submission, &assignment);
    Ok(SubmissionResponse::from_submission(submission, late))
}

/// 列出全部未评分提交
///
/// 全系统扫描，不在本层按课程过滤；需要课程视角的调用方自行与
/// 课程成员关系求交。
pub async fn list_ungraded(service: &SubmissionService) -> Result<Vec<Submission>> {
    service.storage().list_ungraded_submissions().await
}

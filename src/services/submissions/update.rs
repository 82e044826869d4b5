use super::SubmissionService;
use crate::errors::{LMSystemError, Result};
use crate::models::submissions::{entities::Submission, requests::UpdateSubmissionRequest};

/// 部分更新提交
///
/// None 字段保持不变。内容修改仅在截止日期未过时允许；得分修改
/// 与评分走同一范围校验。全部校验通过后才落库，失败不产生部分写入。
pub async fn update(
    service: &SubmissionService,
    submission_id: i64,
    req: UpdateSubmissionRequest,
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

    if let Some(content) = &req.content {
        crate::utils::validate_content(content).map_err(LMSystemError::validation)?;
        let today = chrono::Utc::now().date_naive();
        if let Some(due_date) = assignment.due_date
            && due_date < today
        {
            return Err(LMSystemError::validation(format!(
                "作业 {} 的截止日期 {due_date} 已过，不能再修改内容",
                assignment.id
            )));
        }
    }

    if let Some(score) = req.score
        && (score < 0 || score > assignment.max_score)
    {
        return Err(LMSystemError::validation(format!(
            "得分 {score} 超出范围 [0, {}]",
            assignment.max_score
        )));
    }

    storage
        .update_submission(submission_id, req)
        .await?
        .ok_or_else(|| LMSystemError::not_found(format!("提交 {submission_id} 不存在")))
}

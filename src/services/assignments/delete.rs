use tracing::info;

use super::AssignmentService;
use crate::errors::{LMSystemError, Result};

/// 删除作业
///
/// 提交记录随作业一并显式删除，未评分的提交也不会遗留为孤儿。
pub async fn delete_assignment(service: &AssignmentService, assignment_id: i64) -> Result<()> {
    let storage = service.storage();

    if storage
        .get_assignment_by_id(assignment_id)
        .await?
        .is_none()
    {
        return Err(LMSystemError::not_found(format!(
            "作业 {assignment_id} 不存在"
        )));
    }

    let submissions = storage.list_submissions_by_assignment(assignment_id).await?;
    let submission_count = submissions.len();
    for submission in submissions {
        storage.delete_submission(submission.id).await?;
    }

    storage.delete_assignment(assignment_id).await?;
    info!(
        "作业 {} 已删除，连带 {} 条提交",
        assignment_id, submission_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::services::assignments::create::tests::setup;

    #[tokio::test]
    async fn test_delete_assignment_removes_submissions() {
        let (service, lesson_id) = setup().await;
        let assignment = service
            .create_assignment(crate::models::assignments::requests::CreateAssignmentRequest {
                lesson_id,
                title: "第一次作业".to_string(),
                description: None,
                max_score: 100,
                due_date: None,
            })
            .await
            .unwrap();

        let storage = service.storage();
        let submission = storage
            .create_submission(crate::models::submissions::requests::SubmitAssignmentRequest {
                student_id: 1,
                assignment_id: assignment.id,
                content: "答案".to_string(),
            })
            .await
            .unwrap();

        service.delete_assignment(assignment.id).await.unwrap();

        assert!(
            storage
                .get_assignment_by_id(assignment.id)
                .await
                .unwrap()
                .is_none()
        );
        // 未评分的提交也一并删除，不遗留孤儿
        assert!(
            storage
                .get_submission_by_id(submission.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(storage.list_ungraded_submissions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_assignment_not_found() {
        let (service, _lesson_id) = setup().await;

        let err = service.delete_assignment(9999).await.unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}

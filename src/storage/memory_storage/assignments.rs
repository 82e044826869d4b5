//! 作业存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};

impl MemoryStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now();

        let record = Assignment {
            id: self.next_id(),
            lesson_id: assignment.lesson_id,
            title: assignment.title,
            description: assignment.description,
            max_score: assignment.max_score,
            due_date: assignment.due_date,
            created_at: now,
            updated_at: now,
        };

        self.assignments.insert(record.id, record.clone());
        Ok(record)
    }

    /// 通过ID获取作业信息
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        Ok(self.assignments.get(&assignment_id).map(|a| a.clone()))
    }

    /// 列出课时下的作业
    pub async fn list_assignments_by_lesson_impl(&self, lesson_id: i64) -> Result<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|entry| entry.lesson_id == lesson_id)
            .map(|entry| entry.clone())
            .collect();
        assignments.sort_by_key(|a| a.id);
        Ok(assignments)
    }

    /// 删除作业行
    ///
    /// 提交记录由服务层显式清理。
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        Ok(self.assignments.remove(&assignment_id).is_some())
    }
}

pub mod cancel;
pub mod enroll;
pub mod query;
pub mod status;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::entities::Enrollment;
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 学生选课
    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        enroll::enroll(self, student_id, course_id).await
    }

    /// 设置选课状态（令牌不区分大小写）
    pub async fn set_status(&self, enrollment_id: i64, status_token: &str) -> Result<Enrollment> {
        status::set_status(self, enrollment_id, status_token).await
    }

    /// 标记完成课程
    pub async fn complete(&self, enrollment_id: i64) -> Result<Enrollment> {
        status::complete(self, enrollment_id).await
    }

    /// 取消选课（删除记录）
    pub async fn cancel(&self, enrollment_id: i64) -> Result<()> {
        cancel::cancel(self, enrollment_id).await
    }

    /// 通过 (student, course) 取消选课
    pub async fn cancel_by_pair(&self, student_id: i64, course_id: i64) -> Result<()> {
        cancel::cancel_by_pair(self, student_id, course_id).await
    }

    /// 是否存在选课记录（不区分状态）
    pub async fn is_enrolled(&self, student_id: i64, course_id: i64) -> Result<bool> {
        query::is_enrolled(self, student_id, course_id).await
    }

    /// 统计课程的在读选课数
    pub async fn active_count(&self, course_id: i64) -> Result<i64> {
        query::active_count(self, course_id).await
    }
}

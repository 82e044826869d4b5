pub mod create;
pub mod delete;
pub mod detail;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建课程
    pub async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        create::create_course(self, req).await
    }

    /// 获取课程详情
    pub async fn get_course(&self, course_id: i64) -> Result<Course> {
        detail::get_course(self, course_id).await
    }

    /// 删除课程（显式级联全部子实体）
    pub async fn delete_course(&self, course_id: i64) -> Result<()> {
        delete::delete_course(self, course_id).await
    }
}

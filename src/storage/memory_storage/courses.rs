//! 课程存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};

impl MemoryStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, course: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now();

        let record = Course {
            id: self.next_id(),
            title: course.title,
            description: course.description,
            teacher_id: course.teacher_id,
            category_id: course.category_id,
            created_at: now,
            updated_at: now,
        };

        self.courses.insert(record.id, record.clone());
        Ok(record)
    }

    /// 通过ID获取课程信息
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.courses.get(&course_id).map(|c| c.clone()))
    }

    /// 删除课程行
    ///
    /// 子实体不在这里级联，由服务层逐一显式删除。
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        Ok(self.courses.remove(&course_id).is_some())
    }
}

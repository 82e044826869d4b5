//! 课时存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::lessons::{entities::Lesson, requests::CreateLessonRequest};

impl MemoryStorage {
    /// 创建课时
    pub async fn create_lesson_impl(&self, lesson: CreateLessonRequest) -> Result<Lesson> {
        let record = Lesson {
            id: self.next_id(),
            module_id: lesson.module_id,
            title: lesson.title,
            content: lesson.content,
            created_at: chrono::Utc::now(),
        };

        self.lessons.insert(record.id, record.clone());
        Ok(record)
    }

    /// 通过ID获取课时信息
    pub async fn get_lesson_by_id_impl(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        Ok(self.lessons.get(&lesson_id).map(|l| l.clone()))
    }

    /// 列出模块下的课时
    pub async fn list_lessons_by_module_impl(&self, module_id: i64) -> Result<Vec<Lesson>> {
        let mut lessons: Vec<Lesson> = self
            .lessons
            .iter()
            .filter(|entry| entry.module_id == module_id)
            .map(|entry| entry.clone())
            .collect();
        lessons.sort_by_key(|l| l.id);
        Ok(lessons)
    }

    /// 删除课时
    pub async fn delete_lesson_impl(&self, lesson_id: i64) -> Result<bool> {
        Ok(self.lessons.remove(&lesson_id).is_some())
    }
}

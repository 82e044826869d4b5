pub mod create;
pub mod delete;
pub mod lessons;
pub mod list;
pub mod reorder;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::lessons::{entities::Lesson, requests::CreateLessonRequest};
use crate::models::modules::{entities::Module, requests::CreateModuleRequest};
use crate::storage::Storage;

pub struct ModuleService {
    storage: Arc<dyn Storage>,
}

impl ModuleService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 创建模块（缺省追加到课程末尾）
    pub async fn create_module(&self, req: CreateModuleRequest) -> Result<Module> {
        create::create_module(self, req).await
    }

    /// 按位置列出课程内模块
    pub async fn list_modules(&self, course_id: i64) -> Result<Vec<Module>> {
        list::list_modules(self, course_id).await
    }

    /// 移动单个模块到新位置，返回重排后的课程内全部模块
    pub async fn move_module(&self, module_id: i64, new_position: i32) -> Result<Vec<Module>> {
        reorder::move_module(self, module_id, new_position).await
    }

    /// 按给定顺序重排课程内全部模块
    pub async fn reorder_modules(
        &self,
        course_id: i64,
        ordered_ids: &[i64],
    ) -> Result<Vec<Module>> {
        reorder::reorder_modules(self, course_id, ordered_ids).await
    }

    /// 删除模块（显式级联测验、作答、课时、作业、提交）
    pub async fn delete_module(&self, module_id: i64) -> Result<()> {
        delete::delete_module(self, module_id).await
    }

    /// 在模块下创建课时
    pub async fn add_lesson(&self, req: CreateLessonRequest) -> Result<Lesson> {
        lessons::add_lesson(self, req).await
    }

    /// 列出模块下的课时
    pub async fn list_lessons(&self, module_id: i64) -> Result<Vec<Lesson>> {
        lessons::list_lessons(self, module_id).await
    }

    /// 删除课时（显式级联作业与提交）
    pub async fn delete_lesson(&self, lesson_id: i64) -> Result<()> {
        lessons::delete_lesson(self, lesson_id).await
    }
}

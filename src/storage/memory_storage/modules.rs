//! 模块存储操作
//!
//! 课程内位置是从 1 开始的稠密排列。所有改动位置的操作都在课程级
//! 串行锁内完成读改写，避免并发重排破坏排列不变量。

use super::MemoryStorage;
use crate::errors::{LMSystemError, Result};
use crate::models::modules::{entities::Module, requests::CreateModuleRequest};

impl MemoryStorage {
    /// 创建模块
    ///
    /// 未指定位置时追加到课程末尾（现有数量 + 1）；显式位置原样写入，
    /// 不触发已有模块重排。
    pub async fn create_module_impl(&self, module: CreateModuleRequest) -> Result<Module> {
        let lock = self.course_lock(module.course_id);
        let _guard = lock.lock().await;

        let position = match module.position {
            Some(position) => position,
            None => self.collect_course_modules(module.course_id).len() as i32 + 1,
        };

        let record = Module {
            id: self.next_id(),
            course_id: module.course_id,
            title: module.title,
            position,
            created_at: chrono::Utc::now(),
        };

        self.modules.insert(record.id, record.clone());
        Ok(record)
    }

    /// 通过ID获取模块信息
    pub async fn get_module_by_id_impl(&self, module_id: i64) -> Result<Option<Module>> {
        Ok(self.modules.get(&module_id).map(|m| m.clone()))
    }

    /// 按位置列出课程内模块
    pub async fn list_modules_by_course_impl(&self, course_id: i64) -> Result<Vec<Module>> {
        Ok(self.collect_course_modules(course_id))
    }

    /// 移动单个模块到新位置并重排课程内全部模块
    ///
    /// 目标位置收敛到 [1, n]；移动后课程内位置重排为 1..n。
    pub async fn move_module_impl(&self, module_id: i64, new_position: i32) -> Result<Vec<Module>> {
        let course_id = self
            .modules
            .get(&module_id)
            .map(|m| m.course_id)
            .ok_or_else(|| LMSystemError::not_found(format!("模块 {module_id} 不存在")))?;

        let lock = self.course_lock(course_id);
        let _guard = lock.lock().await;

        let mut siblings = self.collect_course_modules(course_id);
        let current_index = siblings
            .iter()
            .position(|m| m.id == module_id)
            .ok_or_else(|| LMSystemError::not_found(format!("模块 {module_id} 不存在")))?;

        let moved = siblings.remove(current_index);
        let target_index = new_position.clamp(1, siblings.len() as i32 + 1) as usize - 1;
        siblings.insert(target_index, moved);

        Ok(self.renumber_course_modules(siblings))
    }

    /// 按给定顺序重排课程内全部模块
    pub async fn reorder_modules_impl(
        &self,
        course_id: i64,
        ordered_ids: &[i64],
    ) -> Result<Vec<Module>> {
        let lock = self.course_lock(course_id);
        let _guard = lock.lock().await;

        let existing = self.collect_course_modules(course_id);
        if ordered_ids.len() != existing.len() {
            return Err(LMSystemError::validation(format!(
                "重排ID数量 {} 与课程 {course_id} 的模块数量 {} 不一致",
                ordered_ids.len(),
                existing.len()
            )));
        }

        let mut remaining: std::collections::HashMap<i64, Module> =
            existing.into_iter().map(|m| (m.id, m)).collect();

        let mut reordered = Vec::with_capacity(ordered_ids.len());
        for id in ordered_ids {
            match remaining.remove(id) {
                Some(module) => reordered.push(module),
                None => {
                    return Err(LMSystemError::validation(format!(
                        "模块 {id} 不属于课程 {course_id}"
                    )));
                }
            }
        }

        Ok(self.renumber_course_modules(reordered))
    }

    /// 删除模块并将剩余模块重排为 1..n
    pub async fn delete_module_impl(&self, module_id: i64) -> Result<bool> {
        let course_id = match self.modules.get(&module_id).map(|m| m.course_id) {
            Some(course_id) => course_id,
            None => return Ok(false),
        };

        let lock = self.course_lock(course_id);
        let _guard = lock.lock().await;

        if self.modules.remove(&module_id).is_none() {
            return Ok(false);
        }

        let survivors = self.collect_course_modules(course_id);
        self.renumber_course_modules(survivors);
        Ok(true)
    }

    /// 收集课程内模块，按位置排序（位置相同时按ID稳定）
    fn collect_course_modules(&self, course_id: i64) -> Vec<Module> {
        let mut modules: Vec<Module> = self
            .modules
            .iter()
            .filter(|entry| entry.course_id == course_id)
            .map(|entry| entry.clone())
            .collect();
        modules.sort_by_key(|m| (m.position, m.id));
        modules
    }

    /// 按给定顺序将位置重排为 1..n 并写回
    fn renumber_course_modules(&self, ordered: Vec<Module>) -> Vec<Module> {
        let mut renumbered = Vec::with_capacity(ordered.len());
        for (index, mut module) in ordered.into_iter().enumerate() {
            module.position = index as i32 + 1;
            self.modules.insert(module.id, module.clone());
            renumbered.push(module);
        }
        renumbered
    }
}

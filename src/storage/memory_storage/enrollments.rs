//! 选课存储操作
//!
//! (student_id, course_id) 唯一索引在插入时原子生效，等价于数据库的
//! 复合唯一约束；服务层的存在性预检只是提前返回的优化。

use dashmap::mapref::entry::Entry;

use super::MemoryStorage;
use crate::errors::{LMSystemError, Result};
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};

impl MemoryStorage {
    /// 创建选课记录
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
        enroll_date: chrono::NaiveDate,
    ) -> Result<Enrollment> {
        let record = Enrollment {
            id: self.next_id(),
            student_id,
            course_id,
            status: EnrollmentStatus::Active,
            enroll_date,
            updated_at: chrono::Utc::now(),
        };

        match self.enrollment_index.entry((student_id, course_id)) {
            Entry::Occupied(_) => Err(LMSystemError::conflict(format!(
                "学生 {student_id} 已选修课程 {course_id}"
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(record.id);
                self.enrollments.insert(record.id, record.clone());
                Ok(record)
            }
        }
    }

    /// 通过ID获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
        Ok(self.enrollments.get(&enrollment_id).map(|e| e.clone()))
    }

    /// 通过 (student, course) 获取选课记录
    pub async fn get_enrollment_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let enrollment_id = match self.enrollment_index.get(&(student_id, course_id)) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.enrollments.get(&enrollment_id).map(|e| e.clone()))
    }

    /// 更新选课状态
    pub async fn update_enrollment_status_impl(
        &self,
        enrollment_id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        match self.enrollments.get_mut(&enrollment_id) {
            Some(mut enrollment) => {
                enrollment.status = status;
                enrollment.updated_at = chrono::Utc::now();
                Ok(Some(enrollment.clone()))
            }
            None => Ok(None),
        }
    }

    /// 删除选课记录
    pub async fn delete_enrollment_impl(&self, enrollment_id: i64) -> Result<bool> {
        match self.enrollments.remove(&enrollment_id) {
            Some((_, enrollment)) => {
                self.enrollment_index
                    .remove(&(enrollment.student_id, enrollment.course_id));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 通过 (student, course) 删除选课记录
    pub async fn delete_enrollment_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<bool> {
        match self.enrollment_index.remove(&(student_id, course_id)) {
            Some((_, enrollment_id)) => {
                self.enrollments.remove(&enrollment_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 统计课程的在读选课数
    pub async fn count_active_enrollments_impl(&self, course_id: i64) -> Result<i64> {
        let count = self
            .enrollments
            .iter()
            .filter(|entry| {
                entry.course_id == course_id && entry.status == EnrollmentStatus::Active
            })
            .count();
        Ok(count as i64)
    }

    /// 列出课程的全部选课记录
    pub async fn list_enrollments_by_course_impl(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        let mut enrollments: Vec<Enrollment> = self
            .enrollments
            .iter()
            .filter(|entry| entry.course_id == course_id)
            .map(|entry| entry.clone())
            .collect();
        enrollments.sort_by_key(|e| e.id);
        Ok(enrollments)
    }
}

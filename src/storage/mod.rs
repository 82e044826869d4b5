use std::sync::Arc;

use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    enrollments::entities::{Enrollment, EnrollmentStatus},
    lessons::{entities::Lesson, requests::CreateLessonRequest},
    modules::{entities::Module, requests::CreateModuleRequest},
    quizzes::{
        entities::{Quiz, QuizAttempt},
        requests::CreateQuizRequest,
    },
    submissions::{
        entities::Submission,
        requests::{SubmitAssignmentRequest, UpdateSubmissionRequest},
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::config::AppConfig;
use crate::errors::{LMSystemError, Result};

pub mod memory_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户方法（外部身份服务的最小视图）
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 删除课程（仅本行，子实体由服务层显式清理）
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 模块管理方法
    // 创建模块，缺省位置为课程内现有数量 + 1
    async fn create_module(&self, module: CreateModuleRequest) -> Result<Module>;
    // 通过ID获取模块信息
    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>>;
    // 按位置列出课程内模块
    async fn list_modules_by_course(&self, course_id: i64) -> Result<Vec<Module>>;
    // 移动单个模块到新位置并重排课程内全部模块（按课程串行）
    async fn move_module(&self, module_id: i64, new_position: i32) -> Result<Vec<Module>>;
    // 按给定顺序重排课程内全部模块（按课程串行）
    async fn reorder_modules(&self, course_id: i64, ordered_ids: &[i64]) -> Result<Vec<Module>>;
    // 删除模块并重排剩余模块位置（按课程串行）
    async fn delete_module(&self, module_id: i64) -> Result<bool>;

    /// 课时管理方法
    // 创建课时
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课时信息
    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>>;
    // 列出模块下的课时
    async fn list_lessons_by_module(&self, module_id: i64) -> Result<Vec<Lesson>>;
    // 删除课时
    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool>;

    /// 选课管理方法
    // 创建选课记录；(student, course) 唯一约束在此强制执行
    async fn create_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        enroll_date: chrono::NaiveDate,
    ) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>>;
    // 通过 (student, course) 获取选课记录
    async fn get_enrollment_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 更新选课状态
    async fn update_enrollment_status(
        &self,
        enrollment_id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    // 删除选课记录（取消选课即删除）
    async fn delete_enrollment(&self, enrollment_id: i64) -> Result<bool>;
    // 通过 (student, course) 删除选课记录
    async fn delete_enrollment_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<bool>;
    // 统计课程的在读选课数
    async fn count_active_enrollments(&self, course_id: i64) -> Result<i64>;
    // 列出课程的全部选课记录
    async fn list_enrollments_by_course(&self, course_id: i64) -> Result<Vec<Enrollment>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出课时下的作业
    async fn list_assignments_by_lesson(&self, lesson_id: i64) -> Result<Vec<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 创建提交；(assignment, student) 唯一约束在此强制执行
    async fn create_submission(&self, submission: SubmitAssignmentRequest) -> Result<Submission>;
    // 通过ID获取提交信息
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 通过 (assignment, student) 获取提交信息
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 写入评分与评语（无条件覆盖两个字段）
    async fn grade_submission(
        &self,
        submission_id: i64,
        score: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;
    // 部分更新提交（None 字段保持不变）
    async fn update_submission(
        &self,
        submission_id: i64,
        update: UpdateSubmissionRequest,
    ) -> Result<Option<Submission>>;
    // 列出全部未评分提交（全系统扫描）
    async fn list_ungraded_submissions(&self) -> Result<Vec<Submission>>;
    // 列出作业下的提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 删除提交
    async fn delete_submission(&self, submission_id: i64) -> Result<bool>;

    /// 测验管理方法
    // 创建测验（含题目与选项）；模块至多一个测验在此强制执行
    async fn create_quiz(&self, quiz: CreateQuizRequest) -> Result<Quiz>;
    // 通过ID获取测验
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    // 通过模块ID获取测验
    async fn get_quiz_by_module(&self, module_id: i64) -> Result<Option<Quiz>>;
    // 删除测验
    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool>;

    /// 作答记录管理方法
    // 创建作答记录；(quiz, student) 唯一约束在此强制执行
    async fn create_quiz_attempt(
        &self,
        quiz_id: i64,
        student_id: i64,
        score_percent: i32,
    ) -> Result<QuizAttempt>;
    // 通过 (quiz, student) 获取作答记录
    async fn get_quiz_attempt_by_quiz_and_student(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<Option<QuizAttempt>>;
    // 列出测验的全部作答记录
    async fn list_quiz_attempts_by_quiz(&self, quiz_id: i64) -> Result<Vec<QuizAttempt>>;
    // 删除作答记录
    async fn delete_quiz_attempt(&self, attempt_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    match config.storage.storage_type.as_str() {
        "memory" => Ok(Arc::new(memory_storage::MemoryStorage::new())),
        other => Err(LMSystemError::storage_plugin_not_found(format!(
            "未知的存储后端: {other}. 支持: memory"
        ))),
    }
}

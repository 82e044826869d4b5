//! 内存存储实现
//!
//! 基于 DashMap 的进程内存储层。复合唯一索引与按课程的重排锁
//! 在这里承担与数据库唯一约束 / 行级锁等价的职责。

mod assignments;
mod courses;
mod enrollments;
mod lessons;
mod modules;
mod quiz_attempts;
mod quizzes;
mod submissions;
mod users;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::{
    assignments::entities::Assignment, courses::entities::Course, enrollments::entities::Enrollment,
    lessons::entities::Lesson, modules::entities::Module, quizzes::entities::Quiz,
    quizzes::entities::QuizAttempt, submissions::entities::Submission, users::entities::User,
};

/// 内存存储实现
pub struct MemoryStorage {
    id_seq: AtomicI64,

    pub(crate) users: DashMap<i64, User>,
    pub(crate) courses: DashMap<i64, Course>,
    pub(crate) modules: DashMap<i64, Module>,
    pub(crate) lessons: DashMap<i64, Lesson>,
    pub(crate) assignments: DashMap<i64, Assignment>,
    pub(crate) submissions: DashMap<i64, Submission>,
    pub(crate) enrollments: DashMap<i64, Enrollment>,
    pub(crate) quizzes: DashMap<i64, Quiz>,
    pub(crate) quiz_attempts: DashMap<i64, QuizAttempt>,

    // 复合唯一索引，插入即约束
    pub(crate) enrollment_index: DashMap<(i64, i64), i64>, // (student_id, course_id) -> enrollment_id
    pub(crate) submission_index: DashMap<(i64, i64), i64>, // (assignment_id, student_id) -> submission_id
    pub(crate) attempt_index: DashMap<(i64, i64), i64>,    // (quiz_id, student_id) -> attempt_id
    pub(crate) quiz_module_index: DashMap<i64, i64>,       // module_id -> quiz_id

    // 课程级串行锁，保护模块位置的读改写
    pub(crate) course_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        info!("内存存储初始化完成");
        Self {
            id_seq: AtomicI64::new(1),
            users: DashMap::new(),
            courses: DashMap::new(),
            modules: DashMap::new(),
            lessons: DashMap::new(),
            assignments: DashMap::new(),
            submissions: DashMap::new(),
            enrollments: DashMap::new(),
            quizzes: DashMap::new(),
            quiz_attempts: DashMap::new(),
            enrollment_index: DashMap::new(),
            submission_index: DashMap::new(),
            attempt_index: DashMap::new(),
            quiz_module_index: DashMap::new(),
            course_locks: DashMap::new(),
        }
    }

    /// 分配下一个实体ID
    pub(crate) fn next_id(&self) -> i64 {
        self.id_seq.fetch_add(1, Ordering::Relaxed)
    }

    /// 获取课程的重排锁
    pub(crate) fn course_lock(&self, course_id: i64) -> Arc<Mutex<()>> {
        self.course_locks
            .entry(course_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// Storage trait 实现
use crate::errors::Result;
use crate::models::{
    assignments::requests::CreateAssignmentRequest,
    courses::requests::CreateCourseRequest,
    enrollments::entities::EnrollmentStatus,
    lessons::requests::CreateLessonRequest,
    modules::requests::CreateModuleRequest,
    quizzes::requests::CreateQuizRequest,
    submissions::requests::{SubmitAssignmentRequest, UpdateSubmissionRequest},
    users::requests::CreateUserRequest,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for MemoryStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 模块排序模块
    async fn create_module(&self, module: CreateModuleRequest) -> Result<Module> {
        self.create_module_impl(module).await
    }

    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>> {
        self.get_module_by_id_impl(module_id).await
    }

    async fn list_modules_by_course(&self, course_id: i64) -> Result<Vec<Module>> {
        self.list_modules_by_course_impl(course_id).await
    }

    async fn move_module(&self, module_id: i64, new_position: i32) -> Result<Vec<Module>> {
        self.move_module_impl(module_id, new_position).await
    }

    async fn reorder_modules(&self, course_id: i64, ordered_ids: &[i64]) -> Result<Vec<Module>> {
        self.reorder_modules_impl(course_id, ordered_ids).await
    }

    async fn delete_module(&self, module_id: i64) -> Result<bool> {
        self.delete_module_impl(module_id).await
    }

    // 课时模块
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(lesson).await
    }

    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(lesson_id).await
    }

    async fn list_lessons_by_module(&self, module_id: i64) -> Result<Vec<Lesson>> {
        self.list_lessons_by_module_impl(module_id).await
    }

    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool> {
        self.delete_lesson_impl(lesson_id).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        enroll_date: chrono::NaiveDate,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_id, enroll_date)
            .await
    }

    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(enrollment_id).await
    }

    async fn get_enrollment_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_student_and_course_impl(student_id, course_id)
            .await
    }

    async fn update_enrollment_status(
        &self,
        enrollment_id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_status_impl(enrollment_id, status)
            .await
    }

    async fn delete_enrollment(&self, enrollment_id: i64) -> Result<bool> {
        self.delete_enrollment_impl(enrollment_id).await
    }

    async fn delete_enrollment_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<bool> {
        self.delete_enrollment_by_student_and_course_impl(student_id, course_id)
            .await
    }

    async fn count_active_enrollments(&self, course_id: i64) -> Result<i64> {
        self.count_active_enrollments_impl(course_id).await
    }

    async fn list_enrollments_by_course(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_course_impl(course_id).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_by_lesson(&self, lesson_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_lesson_impl(lesson_id).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 提交模块
    async fn create_submission(&self, submission: SubmitAssignmentRequest) -> Result<Submission> {
        self.create_submission_impl(submission).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        score: i32,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, score, feedback)
            .await
    }

    async fn update_submission(
        &self,
        submission_id: i64,
        update: UpdateSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.update_submission_impl(submission_id, update).await
    }

    async fn list_ungraded_submissions(&self) -> Result<Vec<Submission>> {
        self.list_ungraded_submissions_impl().await
    }

    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
            .await
    }

    async fn delete_submission(&self, submission_id: i64) -> Result<bool> {
        self.delete_submission_impl(submission_id).await
    }

    // 测验模块
    async fn create_quiz(&self, quiz: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(quiz).await
    }

    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(quiz_id).await
    }

    async fn get_quiz_by_module(&self, module_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_module_impl(module_id).await
    }

    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool> {
        self.delete_quiz_impl(quiz_id).await
    }

    // 作答记录模块
    async fn create_quiz_attempt(
        &self,
        quiz_id: i64,
        student_id: i64,
        score_percent: i32,
    ) -> Result<QuizAttempt> {
        self.create_quiz_attempt_impl(quiz_id, student_id, score_percent)
            .await
    }

    async fn get_quiz_attempt_by_quiz_and_student(
        &self,
        quiz_id: i64,
        student_id: i64,
    ) -> Result<Option<QuizAttempt>> {
        self.get_quiz_attempt_by_quiz_and_student_impl(quiz_id, student_id)
            .await
    }

    async fn list_quiz_attempts_by_quiz(&self, quiz_id: i64) -> Result<Vec<QuizAttempt>> {
        self.list_quiz_attempts_by_quiz_impl(quiz_id).await
    }

    async fn delete_quiz_attempt(&self, attempt_id: i64) -> Result<bool> {
        self.delete_quiz_attempt_impl(attempt_id).await
    }
}

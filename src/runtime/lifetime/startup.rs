use std::sync::Arc;

use dotenv::dotenv;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::services::{
    AssignmentService, CourseService, EnrollmentService, ModuleService, QuizService,
    SubmissionService,
};
use crate::storage::Storage;

/// 启动上下文：存储与全部服务实例
///
/// 上层（被排除的 HTTP 层或测试）拿到它之后直接调用各服务。
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub courses: CourseService,
    pub modules: ModuleService,
    pub enrollments: EnrollmentService,
    pub assignments: AssignmentService,
    pub submissions: SubmissionService,
    pub quizzes: QuizService,
}

/// 准备核心启动的上下文
pub async fn prepare_core_startup() -> StartupContext {
    dotenv().ok();

    let config = AppConfig::get();
    debug!(
        "Starting {} core (environment: {})",
        config.app.system_name, config.app.environment
    );

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized");

    StartupContext {
        courses: CourseService::new(storage.clone()),
        modules: ModuleService::new(storage.clone()),
        enrollments: EnrollmentService::new(storage.clone()),
        assignments: AssignmentService::new(storage.clone()),
        submissions: SubmissionService::new(storage.clone()),
        quizzes: QuizService::new(storage.clone()),
        storage,
    }
}

pub mod assignments;
pub mod courses;
pub mod enrollments;
pub mod modules;
pub mod quizzes;
pub mod submissions;

pub use assignments::AssignmentService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use modules::ModuleService;
pub use quizzes::QuizService;
pub use submissions::SubmissionService;

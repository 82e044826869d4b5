pub mod assignments;
pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod modules;
pub mod quizzes;
pub mod submissions;
pub mod users;

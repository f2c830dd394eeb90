pub mod difficulty;
pub mod loaders;
pub mod question;
pub mod topic;

pub use difficulty::Difficulty;
pub use loaders::{load_all_plan_files, load_plan_file};
pub use question::{GeneratedQuestion, QuestionSlot, SessionPlan};
pub use topic::InterviewTopic;

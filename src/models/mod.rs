pub mod grading_status;
pub mod submission;

pub use grading_status::GradingStatus;
pub use submission::{parse_init_payload, InitData, Score, SubmissionRecord};

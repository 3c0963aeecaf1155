pub mod model;
pub mod schema;
pub mod verdict;

pub use model::{HomeworkError, HomeworkStatus, PollResponse, Submission};
pub use schema::validate_response;
pub use verdict::parse_status;

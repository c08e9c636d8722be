pub mod api;
pub mod board;
pub mod issue;
pub mod project;
pub mod transition;

// Re-export commonly used types
pub use api::{ApiErrorBody, BoardPage};
pub use board::Board;
pub use issue::{Issue, IssueUpdate};
pub use project::Project;
pub use transition::Transition;

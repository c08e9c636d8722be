pub mod due_date;
pub mod label;
pub mod resolve;
pub mod run;
pub mod search;
pub mod transition;

pub use due_date::{due_date_for, set_due_dates, severity_offset_days, DueDateOutcome};
pub use label::{add_label, LabelOutcome};
pub use resolve::{find_board_id, find_project_key, resolve_base_jql, select_target, Target};
pub use run::{run, RunOptions, RunOutcome};
pub use search::fetch_all_issues;
pub use transition::{move_to_status, TransitionOutcome};

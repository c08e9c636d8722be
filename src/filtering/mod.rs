pub mod builder;

pub use builder::{build_jql, parse_created_on, FilterField, IssueFilters, JqlClause};

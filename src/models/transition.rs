use serde::Serialize;

/// A workflow edge the service currently offers for one issue.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Transition {
    pub id: String,
    pub name: String,
    pub to_status: Option<String>,
}

impl Transition {
    pub fn matches(&self, target: &str) -> bool {
        self.name.to_lowercase() == target.to_lowercase()
    }
}

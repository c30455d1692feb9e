use serde::{Deserialize, Serialize};

/// Coarse conversation topic attached to user messages, derived from a fixed
/// keyword table. Purely heuristic; `General` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Projects,
    Services,
    Tech,
    Contact,
    General,
}

pub fn detect_topic(text: &str) -> Topic {
    let lower = text.to_lowercase();

    if lower.contains("project") {
        Topic::Projects
    } else if lower.contains("service") {
        Topic::Services
    } else if ["tech", "stack", "framework", "language"]
        .iter()
        .any(|k| lower.contains(k))
    {
        Topic::Tech
    } else if ["contact", "email", "hire"].iter().any(|k| lower.contains(k)) {
        Topic::Contact
    } else {
        Topic::General
    }
}

use serde::{Deserialize, Serialize};

/// Persisted session fields used by the external menu-fetch tool.
///
/// The core never reads these; they are kept in the config file so the
/// fetch side has one well-defined place to find them, and so `logout`
/// has one well-defined place to clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub student_id: String,

    #[serde(default)]
    pub institution_id: String,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.student_id.is_empty() && self.institution_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.token.clear();
        self.student_id.clear();
        self.institution_id.clear();
    }
}

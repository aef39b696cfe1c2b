pub mod job;
pub mod profile;
pub mod user;

use serde::Deserialize;

/// Skill list as accepted from clients: a JSON array or a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    List(Vec<String>),
    Csv(String),
}

impl SkillList {
    /// Trims every entry and drops empty ones. Case is preserved.
    pub fn into_skills(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            SkillList::List(items) => items,
            SkillList::Csv(text) => text.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Default for SkillList {
    fn default() -> Self {
        SkillList::List(Vec::new())
    }
}

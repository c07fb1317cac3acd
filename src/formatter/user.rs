use crate::domain::UserInfo;
use crate::error::{Result, SemanticVersionError};
use serde_json::json;

/// Renders an author roster for the CI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFormatter {
    /// `Name <email>, Other <other@x>`
    Csv,
    /// `[{"name":..,"email":..,"commits":..}]`
    Json,
}

impl UserFormatter {
    /// Select a formatter from its configured name
    pub fn from_type(format_type: &str) -> Result<Self> {
        match format_type {
            "csv" => Ok(UserFormatter::Csv),
            "json" => Ok(UserFormatter::Json),
            other => Err(SemanticVersionError::config(format!(
                "unknown user format type '{}'",
                other
            ))),
        }
    }

    /// Format `users` under `label` (e.g. "author")
    pub fn format(&self, label: &str, users: &[UserInfo]) -> Result<String> {
        match self {
            UserFormatter::Csv => Ok(users
                .iter()
                .map(|u| format!("{} <{}>", u.name, u.email))
                .collect::<Vec<_>>()
                .join(", ")),
            UserFormatter::Json => {
                let entries: Vec<_> = users
                    .iter()
                    .map(|u| {
                        json!({
                            "name": u.name,
                            "email": u.email,
                            "commits": u.commits,
                            "role": label,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string(&entries)?)
            }
        }
    }
}

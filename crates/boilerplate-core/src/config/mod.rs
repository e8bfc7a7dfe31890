//! Resolved scaffolding configuration and template substitution variables

pub mod flow;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::path::PathBuf;

/// Format a date as `yyyy.MM.dd`
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format("%Y.%m.%d").to_string()
}

/// Format the year of a date as `yyyy`
pub fn format_year(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

/// Values available to `*.mustache` files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVars {
    pub name: String,
    pub author: String,
    pub now: String,
    #[serde(rename = "nowYear")]
    pub now_year: String,
}

impl TemplateVars {
    pub fn new(name: impl Into<String>, author: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            now: format_compact_date(today),
            now_year: format_year(today),
        }
    }
}

/// Everything the scaffolder needs, fixed before any file is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Target directory, relative to the working directory or absolute
    pub target_dir: PathBuf,
    pub package_name: String,
    pub author: String,
    /// Leaf template id, e.g. `react-ts`
    pub template: &'static str,
    /// Whether a non-empty target may be emptied
    pub overwrite: bool,
    pub vars: TemplateVars,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_compact_date(date), "2024.03.07");
        assert_eq!(format_year(date), "2024");
    }

    #[test]
    fn test_vars_serialize_with_template_keys() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let vars = TemplateVars::new("my-app", "Jane", date);
        let value = serde_json::to_value(&vars).unwrap();
        assert_eq!(value["name"], "my-app");
        assert_eq!(value["author"], "Jane");
        assert_eq!(value["now"], "2023.12.31");
        assert_eq!(value["nowYear"], "2023");
    }
}

// crates/folio-services/src/filter.rs

use crate::project::ProjectRecord;

/// Selector value that matches every project
pub const ALL: &str = "all";

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    /// Parse a filter control value; `"all"` selects everything
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(category) => project.category == *category,
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projects to display for `selection`, in their original order.
///
/// Always returns a fresh vector; the source slice is never aliased.
pub fn select(all_projects: &[ProjectRecord], selection: &FilterSelection) -> Vec<ProjectRecord> {
    all_projects
        .iter()
        .filter(|project| selection.matches(project))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn project(id: i64, category: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            name: format!("repo-{}", id),
            description: "desc".to_string(),
            code_url: format!("https://github.com/u/repo-{}", id),
            live_demo_url: None,
            primary_language: "Rust".to_string(),
            created_at: "1/1/2026".to_string(),
            updated_at: "1/2/2026".to_string(),
            topics: vec![category.to_string()],
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            project(1, "web"),
            project(2, "cli"),
            project(3, "web"),
            project(4, "game"),
            project(5, "cli"),
        ]
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
        assert_eq!(
            FilterSelection::parse("cli"),
            FilterSelection::Category("cli".to_string())
        );
        assert_eq!(FilterSelection::parse("cli").to_string(), "cli");
    }

    #[test]
    fn test_select_all_returns_everything() {
        let all = sample();
        assert_eq!(select(&all, &FilterSelection::All), all);
    }

    #[test]
    fn test_select_all_is_independent_copy() {
        let all = sample();
        let mut shown = select(&all, &FilterSelection::All);
        shown.clear();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_select_category_keeps_order() {
        let all = sample();
        let shown = select(&all, &FilterSelection::parse("cli"));

        let ids: Vec<i64> = shown.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5]);
        assert!(shown.iter().all(|p| p.category == "cli"));
    }

    #[test]
    fn test_select_absent_category_is_empty() {
        assert!(select(&sample(), &FilterSelection::parse("mobile")).is_empty());
    }

    #[test]
    fn test_select_is_idempotent() {
        let all = sample();
        let selection = FilterSelection::parse("web");
        assert_eq!(select(&all, &selection), select(&all, &selection));
    }
}

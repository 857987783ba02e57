use folio_services::filter::{self, FilterSelection, ALL};
use folio_services::{ProjectFeed, ProjectRecord};

/// Project list state: the fetched set, the active filter and the
/// projects derived from both.
///
/// `displayed` is recomputed on every write to `feed` or `active`, so it is
/// never stale.
#[derive(Debug, Clone)]
pub struct ProjectModel {
    feed: ProjectFeed,
    active: FilterSelection,
    displayed: Vec<ProjectRecord>,
    categories: Vec<String>,
}

impl ProjectModel {
    /// `categories` are the fixed filter controls, without "all"
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            feed: ProjectFeed::Loading,
            active: FilterSelection::All,
            displayed: Vec::new(),
            categories,
        }
    }

    /// Replace the project set wholesale with a new fetch result
    pub fn set_feed(&mut self, feed: ProjectFeed) {
        match &feed {
            ProjectFeed::Loaded(projects) => {
                tracing::info!("Loaded {} projects", projects.len())
            }
            ProjectFeed::Unavailable { reason } => {
                tracing::warn!("Projects unavailable: {}", reason)
            }
            ProjectFeed::Malformed { reason } => {
                tracing::warn!("Projects response malformed: {}", reason)
            }
            ProjectFeed::Loading => {}
        }
        self.feed = feed;
        self.recompute();
    }

    /// Apply a filter control value (`"all"` or a category)
    pub fn select(&mut self, value: &str) {
        self.active = FilterSelection::parse(value);
        tracing::debug!("Filter set to {}", self.active);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.displayed = filter::select(self.feed.projects(), &self.active);
    }

    pub fn feed(&self) -> &ProjectFeed {
        &self.feed
    }

    pub fn all_projects(&self) -> &[ProjectRecord] {
        self.feed.projects()
    }

    pub fn displayed(&self) -> &[ProjectRecord] {
        &self.displayed
    }

    pub fn active(&self) -> &FilterSelection {
        &self.active
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.feed, ProjectFeed::Loading)
    }

    /// Filter controls in display order with their active flag
    pub fn filter_controls(&self) -> Vec<(String, bool)> {
        std::iter::once(ALL.to_string())
            .chain(self.categories.iter().cloned())
            .map(|value| {
                let active = value == self.active.as_str();
                (value, active)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn project(id: i64, category: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            name: format!("p{}", id),
            description: "d".to_string(),
            code_url: String::new(),
            live_demo_url: None,
            primary_language: "Other".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            topics: Vec::new(),
            category: category.to_string(),
        }
    }

    fn model_with(projects: Vec<ProjectRecord>) -> ProjectModel {
        let mut model = ProjectModel::new(vec!["web".to_string(), "cli".to_string()]);
        model.set_feed(ProjectFeed::Loaded(projects));
        model
    }

    #[test]
    fn starts_loading_with_nothing_displayed() {
        let model = ProjectModel::new(Vec::new());
        assert!(model.is_loading());
        assert!(model.displayed().is_empty());
        assert_eq!(model.active(), &FilterSelection::All);
    }

    #[test]
    fn selecting_recomputes_displayed() {
        let mut model = model_with(vec![project(1, "web"), project(2, "cli")]);
        assert_eq!(model.displayed().len(), 2);

        model.select("cli");
        assert_eq!(model.displayed().len(), 1);
        assert_eq!(model.displayed()[0].id, 2);

        model.select("all");
        assert_eq!(model.displayed(), model.all_projects());
    }

    #[test]
    fn new_feed_respects_active_filter() {
        let mut model = ProjectModel::new(Vec::new());
        model.select("cli");
        model.set_feed(ProjectFeed::Loaded(vec![project(1, "web"), project(2, "cli")]));

        assert_eq!(model.displayed().len(), 1);
        assert_eq!(model.displayed()[0].category, "cli");
    }

    #[test]
    fn failed_feed_displays_nothing() {
        let mut model = model_with(vec![project(1, "web")]);
        model.set_feed(ProjectFeed::Unavailable {
            reason: "timeout".to_string(),
        });
        assert!(model.displayed().is_empty());
        assert!(!model.is_loading());
    }

    #[test]
    fn filter_controls_mark_active() {
        let mut model = model_with(Vec::new());
        model.select("cli");
        assert_eq!(
            model.filter_controls(),
            vec![
                ("all".to_string(), false),
                ("web".to_string(), false),
                ("cli".to_string(), true),
            ]
        );
    }
}

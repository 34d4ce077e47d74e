use serde::Serialize;

use crate::aggregate::{aggregate, CategoryBucket};
use crate::chart::{draw_pie, PieChart};
use crate::filter::filter_projects;
use crate::project::ProjectRecord;
use crate::render::{projects_title, render_projects, HeadingLevel, ProjectBlock, ProjectList};

/// What the visitor is currently looking for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Always stored lower-cased.
    pub query: String,
    pub selected_category: Option<String>,
}

impl SelectionState {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    /// Selecting the current category clears it; anything else replaces it.
    pub fn toggle_category(&mut self, label: &str) {
        if self.selected_category.as_deref() == Some(label) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(label.to_string());
        }
    }
}

/// Single owner of the project page: records, selection and rendered output.
///
/// Every state change goes through `recompute`, which re-filters, re-renders
/// the list and redraws the pie from the same filtered set.
#[derive(Debug, Clone)]
pub struct ProjectsController {
    records: Vec<ProjectRecord>,
    state: SelectionState,
    heading_level: HeadingLevel,
    list: ProjectList,
    buckets: Vec<CategoryBucket>,
    chart: PieChart,
}

impl ProjectsController {
    pub fn new(records: Vec<ProjectRecord>, heading_level: &str) -> Self {
        let mut controller = Self {
            records,
            state: SelectionState::default(),
            heading_level: HeadingLevel::parse_or_default(heading_level),
            list: ProjectList::default(),
            buckets: Vec::new(),
            chart: PieChart::default(),
        };
        controller.recompute();
        controller
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn blocks(&self) -> &[ProjectBlock] {
        self.list.blocks()
    }

    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    pub const fn chart(&self) -> &PieChart {
        &self.chart
    }

    pub const fn heading_level(&self) -> HeadingLevel {
        self.heading_level
    }

    /// Title over the list, counted on everything that was loaded.
    pub fn title(&self) -> String {
        projects_title(self.records.len())
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.set_query(query);
        self.recompute();
    }

    pub fn toggle_category(&mut self, label: &str) {
        self.state.toggle_category(label);
        tracing::debug!(
            "category selection now {:?}",
            self.state.selected_category
        );
        self.recompute();
    }

    /// Toggles the category shown at `index` in the legend, if any.
    pub fn toggle_legend_entry(&mut self, index: usize) -> bool {
        let Some(label) = self.chart.legend_label(index).map(str::to_string) else {
            return false;
        };
        self.toggle_category(&label);
        true
    }

    pub fn recompute(&mut self) {
        let stale = self
            .state
            .selected_category
            .as_deref()
            .is_some_and(|selected| {
                let matching = filter_projects(&self.records, &self.state.query, None);
                !aggregate(matching.iter().copied())
                    .iter()
                    .any(|bucket| bucket.label == selected)
            });
        if stale {
            tracing::debug!(
                "selected category {:?} no longer visible, clearing",
                self.state.selected_category
            );
            self.state.selected_category = None;
        }

        let visible = filter_projects(
            &self.records,
            &self.state.query,
            self.state.selected_category.as_deref(),
        );

        if let Err(error) = render_projects(
            visible.iter().copied(),
            Some(&mut self.list),
            self.heading_level.as_str(),
        ) {
            tracing::warn!("project render skipped: {error}");
        }

        self.buckets = aggregate(visible.iter().copied());
        draw_pie(
            &self.buckets,
            self.state.selected_category.as_deref(),
            &mut self.chart,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new("A", "2023"),
            ProjectRecord::new("B", "2023"),
            ProjectRecord::new("C", "2024"),
        ]
    }

    fn titles(controller: &ProjectsController) -> Vec<String> {
        controller
            .blocks()
            .iter()
            .map(|block| block.title.clone())
            .collect()
    }

    #[test]
    fn test_initial_render_shows_everything() {
        let controller = ProjectsController::new(sample(), "h2");
        assert_eq!(controller.blocks().len(), 3);
        assert_eq!(controller.buckets().len(), 2);
        assert_eq!(controller.title(), "3 Projects");
    }

    #[test]
    fn test_selecting_year_filters_and_redraws_pie() {
        let mut controller = ProjectsController::new(sample(), "h2");
        controller.toggle_category("2023");
        assert_eq!(titles(&controller), ["A", "B"]);
        assert_eq!(controller.chart().wedges().len(), 1);
        assert!(controller.chart().wedges()[0].selected);
    }

    #[test]
    fn test_toggle_twice_restores_list() {
        let mut controller = ProjectsController::new(sample(), "h2");
        let before = controller.blocks().to_vec();
        controller.toggle_category("2024");
        controller.toggle_category("2024");
        assert_eq!(controller.blocks(), before.as_slice());
        assert_eq!(controller.state().selected_category, None);
    }

    #[test]
    fn test_query_is_lower_cased() {
        let mut controller = ProjectsController::new(sample(), "h2");
        controller.set_query("B");
        assert_eq!(controller.state().query, "b");
        assert_eq!(titles(&controller), ["B"]);
    }

    #[test]
    fn test_selection_dropped_when_query_hides_it() {
        let mut controller = ProjectsController::new(sample(), "h2");
        controller.toggle_category("2024");
        controller.set_query("a");
        assert_eq!(controller.state().selected_category, None);
        assert_eq!(titles(&controller), ["A"]);
    }

    #[test]
    fn test_selection_kept_when_query_still_matches() {
        let mut controller = ProjectsController::new(sample(), "h2");
        controller.toggle_category("2023");
        controller.set_query("b");
        assert_eq!(controller.state().selected_category.as_deref(), Some("2023"));
        assert_eq!(titles(&controller), ["B"]);
    }

    #[test]
    fn test_legend_index_toggles() {
        let mut controller = ProjectsController::new(sample(), "h2");
        assert!(controller.toggle_legend_entry(1));
        assert_eq!(controller.state().selected_category.as_deref(), Some("2024"));
        assert!(!controller.toggle_legend_entry(5));
    }

    #[test]
    fn test_empty_records_render_empty_container() {
        let controller = ProjectsController::new(Vec::new(), "h2");
        assert!(controller.blocks().is_empty());
        assert!(controller.chart().is_empty());
    }
}

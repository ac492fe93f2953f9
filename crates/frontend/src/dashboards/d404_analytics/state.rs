use super::columns::{ActiveFilters, ProjectRow, CONTRACT_START_DATE_COLUMN_KEY, PROJECT_COLUMN_KEY};
use contracts::dashboards::d404_analytics::{DateRange, ProjectItem, RangeMode};
use leptos::prelude::*;
use std::collections::HashSet;

/// Состояние фильтров страницы аналитики.
///
/// Создаётся один раз на экземпляр страницы и передаётся через context.
#[derive(Clone, Copy)]
pub struct AnalyticsState {
    pub project_items: RwSignal<Vec<ProjectItem>>,
    pub selected_project: RwSignal<Option<String>>,
    pub check_range: RwSignal<RangeMode>,
    pub check_date_range: RwSignal<Option<DateRange>>,
}

impl AnalyticsState {
    pub fn new() -> Self {
        Self {
            project_items: RwSignal::new(Vec::new()),
            selected_project: RwSignal::new(None),
            check_range: RwSignal::new(RangeMode::All),
            check_date_range: RwSignal::new(None),
        }
    }

    /// Rebuild the project options from the rows, replacing the previous list
    pub fn update_project_items<Row: ProjectRow>(&self, rows: &[Row]) {
        let items = collect_project_items(rows);
        log::debug!("d404: {} projects from {} rows", items.len(), rows.len());
        self.project_items.set(items);
    }

    pub fn select_project(&self, project: Option<String>) {
        self.selected_project.set(project);
    }

    pub fn set_range_mode(&self, mode: RangeMode) {
        log::debug!("d404: range mode -> {}", mode.code());
        self.check_range.set(mode);
    }

    /// Set the custom period from two "YYYY-MM-DD" strings
    pub fn set_custom_range(&self, date_from: &str, date_to: &str) -> Result<(), String> {
        match DateRange::parse_iso(date_from, date_to) {
            Ok(range) => {
                self.check_date_range.set(Some(range));
                Ok(())
            }
            Err(e) => {
                log::warn!("d404: invalid custom range: {:#}", e);
                Err(format!("{:#}", e))
            }
        }
    }

    pub fn clear_custom_range(&self) {
        self.check_date_range.set(None);
    }

    /// Активные значения фильтров колонок (отслеживает сигналы)
    pub fn active_filters(&self) -> ActiveFilters {
        let mut active = ActiveFilters::new();
        if let Some(project) = self.selected_project.get() {
            active.insert(PROJECT_COLUMN_KEY, vec![project]);
        }
        active.insert(
            CONTRACT_START_DATE_COLUMN_KEY,
            vec![self.check_range.get().code().to_string()],
        );
        active
    }
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Уникальные названия проектов в порядке первого появления
pub fn collect_project_items<Row: ProjectRow>(rows: &[Row]) -> Vec<ProjectItem> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| row.project_name())
        .filter(|name| seen.insert(*name))
        .map(ProjectItem::from_name)
        .collect()
}

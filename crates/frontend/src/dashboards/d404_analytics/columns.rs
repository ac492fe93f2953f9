//! Описания колонок таблицы клиентов и предикаты фильтров.
//!
//! Колонки создаются для конкретного экземпляра страницы: фильтр по дате
//! получает состояние явно через `contract_start_date_column(state)`.

use super::state::AnalyticsState;
use crate::shared::date_utils::{month_bounds, parse_iso_date, today, week_bounds};
use chrono::NaiveDate;
use contracts::dashboards::d404_analytics::{ClientRow, DateRange, RangeMode};
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

pub const PROJECT_COLUMN_KEY: &str = "projectName";
pub const CONTRACT_START_DATE_COLUMN_KEY: &str = "contractStartDate";

/// Предикат фильтра: (значение фильтра, строка) -> показывать ли строку
pub type FilterFn<Row> = Arc<dyn Fn(&str, &Row) -> bool + Send + Sync>;

/// Активные значения фильтров по ключу колонки
pub type ActiveFilters = HashMap<&'static str, Vec<String>>;

/// Строка, у которой есть название проекта
pub trait ProjectRow {
    fn project_name(&self) -> &str;
}

/// Строка, у которой есть дата начала договора ("YYYY-MM-DD")
pub trait ContractRow {
    fn contract_start_date(&self) -> &str;
}

impl ProjectRow for ClientRow {
    fn project_name(&self) -> &str {
        &self.project_name
    }
}

impl ContractRow for ClientRow {
    fn contract_start_date(&self) -> &str {
        &self.contract_start_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFixed {
    Left,
    Right,
}

/// Описание одной колонки таблицы
pub struct ColumnDescriptor<Row> {
    pub title: &'static str,
    pub key: &'static str,
    /// Width in pixels
    pub width: u32,
    pub fixed: Option<ColumnFixed>,
    pub filter: Option<FilterFn<Row>>,
}

impl<Row> Clone for ColumnDescriptor<Row> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            key: self.key,
            width: self.width,
            fixed: self.fixed,
            filter: self.filter.clone(),
        }
    }
}

impl<Row> ColumnDescriptor<Row> {
    /// Колонка без фильтра и без закрепления
    pub fn plain(title: &'static str, key: &'static str, width: u32) -> Self {
        Self {
            title,
            key,
            width,
            fixed: None,
            filter: None,
        }
    }

    /// Колонка без фильтра принимает любое значение
    pub fn accepts(&self, value: &str, row: &Row) -> bool {
        match &self.filter {
            Some(filter) => filter(value, row),
            None => true,
        }
    }
}

/// Колонка "Проект": точное совпадение названия
pub fn project_column<Row: ProjectRow + 'static>() -> ColumnDescriptor<Row> {
    ColumnDescriptor {
        title: "Проект",
        key: PROJECT_COLUMN_KEY,
        width: 120,
        fixed: Some(ColumnFixed::Left),
        filter: Some(Arc::new(|value: &str, row: &Row| row.project_name() == value)),
    }
}

/// Колонка "Дата начала договора"; режим `year` читает произвольный период из состояния
pub fn contract_start_date_column<Row: ContractRow + 'static>(
    state: AnalyticsState,
) -> ColumnDescriptor<Row> {
    contract_start_date_column_from(move || state.check_date_range.get())
}

/// То же, что `contract_start_date_column`, но период берётся из произвольного источника.
/// Источник и текущая дата читаются при каждом вызове предиката.
pub fn contract_start_date_column_from<Row, F>(custom_range: F) -> ColumnDescriptor<Row>
where
    Row: ContractRow + 'static,
    F: Fn() -> Option<DateRange> + Send + Sync + 'static,
{
    ColumnDescriptor {
        title: "Дата начала договора",
        key: CONTRACT_START_DATE_COLUMN_KEY,
        width: 150,
        fixed: Some(ColumnFixed::Left),
        filter: Some(Arc::new(move |value: &str, row: &Row| {
            contract_date_matches(
                RangeMode::from_code(value),
                row.contract_start_date(),
                today(),
                custom_range(),
            )
        })),
    }
}

/// Проверка даты строки по режиму периода.
///
/// `None` (неизвестный режим) и `All` пропускают всё. `Year` без заданного
/// периода тоже пропускает всё. Нераспознанная дата строки отклоняется
/// всеми ограничивающими режимами.
pub fn contract_date_matches(
    mode: Option<RangeMode>,
    row_date: &str,
    today: NaiveDate,
    custom_range: Option<DateRange>,
) -> bool {
    match mode {
        Some(RangeMode::Month) => is_within(row_date, month_bounds(today)),
        Some(RangeMode::Week) => is_within(row_date, week_bounds(today)),
        Some(RangeMode::Year) => match custom_range {
            Some(range) => parse_iso_date(row_date).is_some_and(|d| range.contains_date(d)),
            None => true,
        },
        Some(RangeMode::All) | None => true,
    }
}

fn is_within(row_date: &str, (first, last): (NaiveDate, NaiveDate)) -> bool {
    parse_iso_date(row_date).is_some_and(|d| first <= d && d <= last)
}

/// Оставляет строки, прошедшие все колонки с активными фильтрами.
/// Внутри колонки достаточно совпадения с любым из выбранных значений.
pub fn filter_rows<Row: Clone>(
    rows: &[Row],
    columns: &[ColumnDescriptor<Row>],
    active: &ActiveFilters,
) -> Vec<Row> {
    rows.iter()
        .filter(|row| {
            columns.iter().all(|col| match active.get(col.key) {
                Some(values) if !values.is_empty() => {
                    values.iter().any(|value| col.accepts(value, row))
                }
                _ => true,
            })
        })
        .cloned()
        .collect()
}

/// Inline style for a header/body cell: width plus sticky offset for fixed columns
pub fn column_style<Row>(columns: &[ColumnDescriptor<Row>], index: usize) -> String {
    let Some(col) = columns.get(index) else {
        return String::new();
    };
    let width = format!("width: {0}px; min-width: {0}px;", col.width);
    match col.fixed {
        Some(ColumnFixed::Left) => {
            let offset: u32 = columns[..index]
                .iter()
                .filter(|c| c.fixed == Some(ColumnFixed::Left))
                .map(|c| c.width)
                .sum();
            format!("{} position: sticky; left: {}px; z-index: 1;", width, offset)
        }
        Some(ColumnFixed::Right) => {
            let offset: u32 = columns[index + 1..]
                .iter()
                .filter(|c| c.fixed == Some(ColumnFixed::Right))
                .map(|c| c.width)
                .sum();
            format!("{} position: sticky; right: {}px; z-index: 1;", width, offset)
        }
        None => width,
    }
}

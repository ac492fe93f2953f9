use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Пункт выпадающего списка проектов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub label: String,
    pub value: String,
}

impl ProjectItem {
    /// Пункт, у которого подпись совпадает со значением
    pub fn from_name(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// Режим фильтрации по дате начала договора
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    #[default]
    All,
    Month,
    Week,
    Year,
}

impl RangeMode {
    /// Код режима, он же значение фильтра колонки
    pub fn code(&self) -> &'static str {
        match self {
            RangeMode::All => "all",
            RangeMode::Month => "month",
            RangeMode::Week => "week",
            RangeMode::Year => "year",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            RangeMode::All => "Все",
            RangeMode::Month => "Этот месяц",
            RangeMode::Week => "Эта неделя",
            RangeMode::Year => "Период",
        }
    }

    pub fn all() -> Vec<RangeMode> {
        vec![
            RangeMode::All,
            RangeMode::Month,
            RangeMode::Week,
            RangeMode::Year,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(RangeMode::All),
            "month" => Some(RangeMode::Month),
            "week" => Some(RangeMode::Week),
            "year" => Some(RangeMode::Year),
            _ => None,
        }
    }
}

/// Произвольный период: границы в миллисекундах Unix time, включительно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: i64,
    pub end: i64,
}

impl DateRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Период по календарным датам (полночь UTC каждой даты)
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: date_to_millis(start),
            end: date_to_millis(end),
        }
    }

    /// Parse a period from two "YYYY-MM-DD" strings as produced by date inputs.
    pub fn parse_iso(date_from: &str, date_to: &str) -> anyhow::Result<Self> {
        let start = NaiveDate::parse_from_str(date_from.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid start date: '{}'", date_from))?;
        let end = NaiveDate::parse_from_str(date_to.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid end date: '{}'", date_to))?;
        if start > end {
            bail!("Start date {} is after end date {}", start, end);
        }
        Ok(Self::from_dates(start, end))
    }

    /// Попадает ли дата (полночь UTC) в период
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        let ts = date_to_millis(date);
        self.start <= ts && ts <= self.end
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(self.start).map(|dt| dt.date_naive())
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(self.end).map(|dt| dt.date_naive())
    }
}

fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Строка таблицы клиентов аналитики
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRow {
    pub id: String,
    pub client_code: String,
    pub project_name: String,
    /// Date in format "YYYY-MM-DD"
    pub contract_start_date: String,
    /// Amount with exactly two fraction digits, e.g. "1234.50"
    pub contract_amount: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_mode_codes() {
        for mode in RangeMode::all() {
            assert_eq!(RangeMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(RangeMode::from_code("quarter"), None);
        assert_eq!(RangeMode::default(), RangeMode::All);
    }

    #[test]
    fn test_range_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RangeMode::Week).unwrap(), "\"week\"");
        let parsed: RangeMode = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(parsed, RangeMode::Year);
    }

    #[test]
    fn test_date_range_contains_bounds() {
        let range = DateRange::from_dates(ymd(2024, 3, 1), ymd(2024, 3, 31));
        assert!(range.contains_date(ymd(2024, 3, 1)));
        assert!(range.contains_date(ymd(2024, 3, 31)));
        assert!(range.contains_date(ymd(2024, 3, 15)));
        assert!(!range.contains_date(ymd(2024, 2, 29)));
        assert!(!range.contains_date(ymd(2024, 4, 1)));
    }

    #[test]
    fn test_date_range_from_epoch() {
        let range = DateRange::from_dates(ymd(1970, 1, 1), ymd(1970, 1, 2));
        assert_eq!(range, DateRange::new(0, 86_400_000));
        assert_eq!(range.start_date(), Some(ymd(1970, 1, 1)));
        assert_eq!(range.end_date(), Some(ymd(1970, 1, 2)));
    }

    #[test]
    fn test_parse_iso() {
        let range = DateRange::parse_iso("2024-01-10", "2024-02-10").unwrap();
        assert_eq!(range.start_date(), Some(ymd(2024, 1, 10)));
        assert_eq!(range.end_date(), Some(ymd(2024, 2, 10)));

        assert!(DateRange::parse_iso("2024-13-01", "2024-02-10").is_err());
        assert!(DateRange::parse_iso("", "2024-02-10").is_err());
        assert!(DateRange::parse_iso("2024-03-01", "2024-02-10").is_err());
    }

    #[test]
    fn test_client_row_uses_column_keys() {
        let row = ClientRow {
            id: "1".into(),
            client_code: "CL-abc123".into(),
            project_name: "Альфа".into(),
            contract_start_date: "2024-05-06".into(),
            contract_amount: "100.00".into(),
            address: "Москва Тверская 1".into(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["projectName"], "Альфа");
        assert_eq!(json["contractStartDate"], "2024-05-06");
    }
}

use crate::shared::date_utils::{format_ymd, today};
use crate::shared::mock_data::{
    random_address_with, random_amount_with, random_date_with, random_string_with, safe_access,
};
use chrono::Duration;
use contracts::dashboards::d404_analytics::ClientRow;
use rand::Rng;
use uuid::Uuid;

const NO_PROJECT: &str = "Без проекта";

/// Параметры генерации демонстрационной таблицы
#[derive(Clone, Debug)]
pub struct MockDataConfig {
    pub row_count: usize,
    /// "YYYY-MM-DD"
    pub date_from: String,
    /// "YYYY-MM-DD"
    pub date_to: String,
    pub amount_min: f64,
    pub amount_max: f64,
    pub code_prefix: String,
    pub code_length: usize,
    pub project_names: Vec<String>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        let now = today();
        Self {
            row_count: 50,
            date_from: format_ymd(now - Duration::days(365)),
            date_to: format_ymd(now),
            amount_min: 1_000.0,
            amount_max: 100_000.0,
            code_prefix: "CL-".to_string(),
            code_length: 6,
            project_names: ["Альфа", "Бета", "Гамма", "Дельта"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

pub fn generate_mock_rows(config: &MockDataConfig) -> Vec<ClientRow> {
    generate_mock_rows_with(&mut rand::thread_rng(), config)
}

pub fn generate_mock_rows_with<R: Rng + ?Sized>(rng: &mut R, config: &MockDataConfig) -> Vec<ClientRow> {
    (0..config.row_count)
        .map(|_| {
            // Пустой список проектов даёт индекс 0 за пределами среза
            let index = rng.gen_range(0..config.project_names.len().max(1));
            ClientRow {
                id: Uuid::new_v4().to_string(),
                client_code: random_string_with(rng, &config.code_prefix, config.code_length),
                project_name: safe_access(&config.project_names, index, NO_PROJECT.to_string()),
                contract_start_date: random_date_with(rng, &config.date_from, &config.date_to),
                contract_amount: random_amount_with(rng, config.amount_min, config.amount_max),
                address: random_address_with(rng),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_utils::parse_iso_date;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_rows_follow_config() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = MockDataConfig {
            row_count: 30,
            date_from: "2024-01-01".into(),
            date_to: "2024-01-31".into(),
            amount_min: 10.0,
            amount_max: 20.0,
            code_prefix: "ID-".into(),
            code_length: 4,
            project_names: vec!["A".into(), "B".into()],
        };
        let rows = generate_mock_rows_with(&mut rng, &config);
        assert_eq!(rows.len(), 30);
        for row in &rows {
            assert!(row.client_code.starts_with("ID-"));
            assert_eq!(row.client_code.len(), 7);
            assert!(row.project_name == "A" || row.project_name == "B");
            let date = parse_iso_date(&row.contract_start_date).unwrap();
            assert_eq!(date.format("%Y-%m").to_string(), "2024-01");
            let amount: f64 = row.contract_amount.parse().unwrap();
            assert!((10.0..=20.0).contains(&amount));
        }
        let ids: std::collections::HashSet<_> = rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_generate_rows_without_projects() {
        let config = MockDataConfig {
            row_count: 3,
            project_names: Vec::new(),
            ..MockDataConfig::default()
        };
        let rows = generate_mock_rows(&config);
        assert!(rows.iter().all(|r| r.project_name == NO_PROJECT));
    }

    #[test]
    fn test_generate_rows_invalid_window_falls_back() {
        let config = MockDataConfig {
            row_count: 2,
            date_from: "bad".into(),
            ..MockDataConfig::default()
        };
        let rows = generate_mock_rows(&config);
        assert!(rows.iter().all(|r| r.contract_start_date == "2024-01-01"));
    }
}

pub mod d404_analytics;

pub use d404_analytics::ui::AnalyticsDashboard;

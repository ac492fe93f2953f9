pub mod d404_analytics;

pub mod date_utils;
pub mod mock_data;

pub mod columns;
pub mod mock;
pub mod state;
pub mod ui;

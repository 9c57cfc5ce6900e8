pub mod navbar;
pub mod ui;

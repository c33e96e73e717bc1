pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod handlers;
pub mod line_editor;
pub mod menu;
pub mod router;
pub mod table;

pub use error::StaffError;

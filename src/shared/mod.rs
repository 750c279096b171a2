pub mod api;
pub mod db;
pub mod formatting;
pub mod validation;

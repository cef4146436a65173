pub mod models;
pub mod source;

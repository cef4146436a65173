pub mod app;
pub mod controller;
pub mod handlers;
pub mod ui;
pub mod undo;

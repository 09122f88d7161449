pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod form;
pub mod logging;
pub mod submission;
pub mod ui;

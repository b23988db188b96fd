pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod ui;

// ABOUTME: Library crate for tabstash exposing public API for testing and external use

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod models;
pub mod session;

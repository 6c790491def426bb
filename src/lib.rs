//! Worblehat web frontend: a navigation bar over two client-side routed pages.

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod models;
pub mod pages;
pub mod route;

pub use app::{App, AppShell};
pub use route::Route;

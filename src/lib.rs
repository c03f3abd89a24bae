pub mod app;
pub mod catalog;
pub mod config;
pub mod console_page;
pub mod gate;
pub mod http;
pub mod session;
pub mod storage;

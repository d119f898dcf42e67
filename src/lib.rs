pub mod auth;
pub mod chat;
pub mod common;
pub mod config;
pub mod controller;
pub mod error;
pub mod network;
pub mod notice;
pub mod session;
pub mod storage;
pub mod ui;

pub use controller::{Intent, RenderProps, ViewController};
pub use error::{ChatError, Result};

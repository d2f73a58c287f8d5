//! deploywatch library
//!
//! Turns cloud CLI deployment payloads into typed deployment and operation
//! records and renders them as a status table.

pub mod app;
pub mod args;
pub mod cli;
pub mod errors;
pub mod filesys;
pub mod logs;
pub mod models;
pub mod parse;
pub mod render;
pub mod storage;
pub mod utils;

//! Cloud CLI adapter

pub mod command;
pub mod queries;
pub mod runner;

//! Runtime models shared by the HTTP layer.

pub mod config;
pub mod state;

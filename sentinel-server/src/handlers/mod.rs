//! HTTP handlers

pub mod evaluate;
pub mod health;
pub mod status;
pub mod v3;

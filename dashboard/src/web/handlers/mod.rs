//! HTTP handlers

pub mod art;
pub mod health;

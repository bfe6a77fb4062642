//! UserDir - A role-based user directory service
//!
//! This crate provides role-derived permission checks for directory
//! operations and the group-overlap rule that decides which users an
//! administrator may manage.

pub mod api;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

//! hostcache Infrastructure Layer
pub mod cache_control;
pub mod repositories;

pub mod web;

pub use web::{create_app, start_web_server};

#![allow(clippy::module_inception)]

pub mod constants;
pub mod fetch_interceptor;
pub mod models;
pub mod runtime;
pub mod types;

mod fetch_interceptor;
pub use fetch_interceptor::*;

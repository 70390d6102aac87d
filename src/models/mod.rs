pub mod common;
pub mod ctx;

pub mod skip_intro;

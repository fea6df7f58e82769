pub mod builder;
pub mod common;
pub mod placeholders;

pub mod config;
pub mod connector;
pub mod internal;

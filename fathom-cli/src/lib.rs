pub mod cli;
pub mod errors;

pub mod command;
pub mod config;
pub mod hosts;
pub mod ownership;
pub mod paths;
pub mod privileges;
pub mod prompt;
pub mod server;
pub mod tracing;

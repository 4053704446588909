//! Terminal navigation shell: a fixed menu column selects which page is shown.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod pages;
pub mod shell;
pub mod terminal;
pub mod ui;

pub use error::ShellError;
pub use pages::{resolve_content, Content, PageDescriptor, PAGES};
pub use shell::Shell;

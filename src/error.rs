use thiserror::Error;

/// Errors surfaced by the page catalog and the selector shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown page id {0}")]
    UnknownPage(usize),
}

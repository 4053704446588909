//! Actions the input layer hands to the app

/// Navigation and control events, one per user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Navigation control N was activated
    Select(usize),

    /// Move to the next page, wrapping
    Next,

    /// Move to the previous page, wrapping
    Prev,

    /// Toggle the help popup
    ToggleHelp,

    /// Close current overlay/popup
    CloseOverlay,

    /// Request quit
    Quit,
}

/// Status line levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

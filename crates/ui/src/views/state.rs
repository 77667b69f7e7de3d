#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The quiz received an action its current state does not allow.
    InvalidState,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidState => "That answer came in after the quiz ended. Try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

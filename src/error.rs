//! Process-level error type.
//!
//! Date parsing and record selection never fail; they degrade to `None`.
//! `AppError` covers the operational failures around them (bad arguments,
//! unreadable replay files, fetch errors) and carries the exit code `scout`
//! terminates with.

/// Output could not be produced.
pub const EXIT_INTERNAL: u8 = 1;
/// Bad CLI value, unreadable input file, non-profile url.
pub const EXIT_USAGE: u8 = 2;
/// Network, navigation or page-source failure.
pub const EXIT_FETCH: u8 = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EXIT_INTERNAL, message)
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::new(EXIT_FETCH, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_distinct_exit_codes() {
        assert_eq!(AppError::internal("x").exit_code(), EXIT_INTERNAL);
        assert_eq!(AppError::usage("x").exit_code(), EXIT_USAGE);
        assert_eq!(AppError::fetch("x").exit_code(), EXIT_FETCH);
        assert_ne!(EXIT_INTERNAL, EXIT_USAGE);
        assert_ne!(EXIT_INTERNAL, EXIT_FETCH);
    }

    #[test]
    fn display_is_the_message() {
        assert_eq!(AppError::fetch("No recorded page").to_string(), "No recorded page");
    }
}

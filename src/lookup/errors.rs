/// Failures of the runtime environment rather than of the input.
///
/// These never become a [`LookupResult::Error`](super::LookupResult::Error);
/// they are returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// The timezone database has no entry for this identifier.
    UnknownTimezone(String),
}

impl std::fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentError::UnknownTimezone(tz) => write!(f, "Timezone database has no entry for {tz}"),
        }
    }
}

impl std::error::Error for EnvironmentError {}

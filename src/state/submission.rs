//! Submission status and delivery failure classification

/// Why the last submission attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// One or more fields failed validation; shown inline
    Validation,
    /// Delivery secrets are missing locally
    Configuration,
    /// The delivery service reported a timeout
    Timeout,
    /// The delivery service rejected its configuration
    InvalidConfigRemote,
    /// Any other delivery failure
    Generic,
}

impl FailureKind {
    /// Classify a delivery-service diagnostic. Matching is case-sensitive.
    pub fn classify(diagnostic: &str) -> Self {
        if diagnostic.contains("timeout") {
            Self::Timeout
        } else if diagnostic.contains("invalid") {
            Self::InvalidConfigRemote
        } else {
            Self::Generic
        }
    }

    /// Toast text for this failure, if the failure is surfaced as a toast
    pub fn toast_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation => None,
            Self::Configuration => Some(CONFIGURATION_ERROR_MESSAGE),
            Self::Timeout => Some("Request timed out. Please try again."),
            Self::InvalidConfigRemote => Some("Invalid configuration. Please try again later."),
            Self::Generic => Some("Could not send message. Try again later."),
        }
    }
}

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const CONFIGURATION_ERROR_MESSAGE: &str = "Configuration error. Please try again later.";

/// State of the contact form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(FailureKind),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Sending",
            Self::Success => "Sent",
            Self::Error(_) => "Failed",
        }
    }
}

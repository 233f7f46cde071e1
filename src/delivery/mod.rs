//! Message-delivery client for contact submissions

mod client;
mod traits;

pub use client::{EmailJsClient, DEFAULT_ENDPOINT};
pub use traits::{Ack, ContactPayload, SubmissionClient, SubmissionError};

#[cfg(test)]
pub use traits::MockSubmissionClient;

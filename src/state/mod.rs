//! Application state module

mod controller;
mod forms;
mod notifications;
mod submission;

pub use controller::*;
pub use forms::*;
pub use notifications::*;
pub use submission::*;

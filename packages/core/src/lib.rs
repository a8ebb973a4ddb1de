//! Core domain types for the echo client.
//!
//! This crate contains shared types used across all packages:
//! - Submission for validated user input
//! - DisplayState and its renderer for the output area
//! - Request tokens for resolving overlapping submissions

mod display;
mod submission;
mod token;

pub use display::{DisplayState, render_display, ERROR_LABEL, PENDING_TEXT, RESPONSE_LABEL};
pub use submission::{Submission, SubmitError, BLANK_INPUT_NOTICE};
pub use token::{RequestToken, TokenIssuer};

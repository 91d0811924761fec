//! # Diagnosis client core
//!
//! Everything between a key press and a drawn screen, minus the terminal.
//!
//! * [`gateway`]: the port to the diagnostic service and its HTTP adapter.
//! * [`submission`]: the symptom buffer and the one-request-at-a-time guard.
//! * [`shell`]: the page state (result, loading, error) and its layout rules.
//! * [`view`]: pure render models for the results list and diagnosis cards.
//!
//! The submission control never touches the shell directly. It emits
//! [`shell::ShellEvent`]s and the shell owner applies them.

pub mod gateway;
pub mod shell;
pub mod submission;
pub mod view;

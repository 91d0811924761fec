//! Shared models and settings for the `medassist` client.
//!
//! * [`diagnosis`]: the wire records exchanged with the diagnostic service.
//! * [`config`]: runtime settings resolved once at startup.
//! * [`error`]: failures surfaced to the user.
//! * [`palette`]: rank to badge colour lookup.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod palette;

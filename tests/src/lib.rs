//! End-to-end checks of the HTTP gateway against an in-process service.

#[cfg(test)]
mod diagnose;

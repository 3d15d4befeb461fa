//! HelpBubble HTTP server library (used by the binary and the end-to-end tests).

pub mod gateway;

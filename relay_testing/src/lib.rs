//! Fake implementations of the external services used by the relay.

pub mod telegram;

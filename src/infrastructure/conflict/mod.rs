//! Infrastructure implementations for OverwriteConfirmer
//!
//! This module provides the terminal implementation of the
//! `OverwriteConfirmer` trait. Fixed answers live next to the port.

mod interactive;

pub use interactive::InteractiveConfirmer;

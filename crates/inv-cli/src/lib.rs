//! Terminal front end for the equipment inventory.
//!
//! The binary parses arguments and dispatches; the modules here hold the
//! pieces worth testing on their own.

pub mod logging;
pub mod render;
pub mod settings;
pub mod shell;

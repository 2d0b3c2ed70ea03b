//! Query engine, selection store, and session controller.
//!
//! All operations here are synchronous and pure with respect to the record
//! set: evaluating a query never mutates records or earlier views.

pub mod engine;
pub mod selection;
pub mod session;

pub use engine::{compare, evaluate, matches, sort_view};
pub use selection::Selection;
pub use session::{Session, ViewStatus};

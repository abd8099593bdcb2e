//! Request middleware.
//!
//! Currently only request tracing; per-request trace ids feed both logs and
//! error responses.

pub mod trace;

pub use trace::Trace;

//! Core handler infrastructure.
//!
//! The fundamental types of the dispatch engine: the [`Handler`] trait and
//! its [`Outcome`], the per-event [`Context`], the [`ResponseMiddleware`]
//! sink, and the ordered [`Registry`].

pub mod context;
pub mod middleware;
pub mod registry;
pub mod traits;

pub use context::Context;
pub use middleware::ResponseMiddleware;
pub use registry::Registry;
pub use traits::{Handler, Outcome};

//! # Confluence
//!
//! > *"Where independent currents meet"*
//!
//! A Rust library for composing independent fallible computations.
//!
//! ## Philosophy
//!
//! At the centre is [`DataResult`], a success-or-failure union with an
//! explicit combinator algebra around it:
//!
//! - **Transform** one result at a time (`map`, `and_then`, `recover`, ...).
//! - **Combine** many results under a chosen error policy: fail on the first
//!   error, or accumulate every error before reporting.
//! - **Catch** panics from untrusted callbacks at explicit boundaries.
//! - **Lift** the whole algebra onto `futures::Stream` for live data.
//!
//! ## Quick Example
//!
//! ```rust
//! use confluence::{CombineTuple, DataResult};
//!
//! fn parse_port(raw: &str) -> DataResult<u16, String> {
//!     match raw.parse() {
//!         Ok(port) => DataResult::success(port),
//!         Err(_) => DataResult::failure(format!("bad port: {raw}")),
//!     }
//! }
//!
//! fn parse_host(raw: &str) -> DataResult<String, String> {
//!     if raw.is_empty() {
//!         DataResult::failure("empty host".to_string())
//!     } else {
//!         DataResult::success(raw.to_string())
//!     }
//! }
//!
//! // Report every configuration error at once, not just the first.
//! let endpoint = (parse_host(""), parse_port("eighty")).combine(
//!     |errors| errors.into_vec().join("; "),
//!     |(host, port)| format!("{host}:{port}"),
//! );
//!
//! assert_eq!(
//!     endpoint,
//!     DataResult::Failure("empty host; bad port: eighty".to_string()),
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catching;
pub mod collections;
pub mod combine;
pub mod merge;
pub mod nonempty;
pub mod result;
pub mod semigroup;
pub mod stream;
pub mod testing;

// Re-exports
pub use catching::PanicPayload;
pub use collections::DataResultIteratorExt;
pub use combine::CombineTuple;
pub use merge::MergeTuple;
pub use nonempty::NonEmptyVec;
pub use result::DataResult;
pub use semigroup::Semigroup;
pub use stream::DataResultStreamExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catching::PanicPayload;
    pub use crate::collections::DataResultIteratorExt;
    pub use crate::combine::CombineTuple;
    pub use crate::merge::MergeTuple;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::result::DataResult;
    pub use crate::semigroup::Semigroup;
    pub use crate::stream::DataResultStreamExt;
}

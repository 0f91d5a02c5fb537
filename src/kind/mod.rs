//! Identity axis: which ownership shape is a type?
//!
//! Three marker families:
//!
//! - [`exact`] — closed (sealed) markers matching only literal instantiations
//!   of the canonical ownership types.
//! - [`soft`] — open markers that wrapper types declare to join a category.
//! - [`raw`] — the built-in pointer shapes `*const T` / `*mut T`.
//!
//! All markers are lifted through `&` and `&mut` layers, the Rust rendition
//! of stripping top-level cv/reference qualifiers before matching: a
//! predicate true for `T` is true for `&T`, `&mut T`, `&&T`, ...
//!
//! Exact implies soft for every canonical type; the reverse never holds for
//! wrapper types.

pub mod exact;
pub mod raw;
pub mod soft;

pub use exact::{ExclusiveExact, SharedExact};
pub use raw::RawPointer;
pub use soft::{ExclusiveSoft, SharedSoft};

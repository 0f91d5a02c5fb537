//! # Layer 2: Shape and capability probes
//!
//! Compile-time detection of the marker and operation traits, resolved per
//! concrete type with no runtime representation.
//!
//! ## Public API
//!
//! Prefer the query macros:
//!
//! ```
//! use ptr_caps::{is_smart_ptr, has_swap};
//!
//! assert!(is_smart_ptr!(Box<i32>));
//! assert!(has_swap!(Box<i32>));
//! assert!(!has_swap!(i32));
//! ```
//!
//! The [`Detect`] probe type underneath is public for direct use; its
//! fallback consts require the corresponding `*Fallback` trait in scope.

pub mod probe;

pub use probe::{
    Detect, DerefFallback, ExclusiveExactFallback, ExclusiveSoftFallback,
    GetDeleterFallback, RawPointerFallback, ReleaseFallback, ResetFallback,
    SharedExactFallback, SharedSoftFallback, SwapFallback,
};

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

//! # ptr-caps
//!
//! Compile-time classification of smart-pointer types.
//!
//! **Every predicate resolves during compilation to a `bool` constant.**
//!
//! ## Taxonomy
//!
//! Two independent axes:
//!
//! ### 1. Identity (shape)
//! Is the type one of the canonical ownership shapes?
//!
//! ```text
//! exact:  Box<T>              -> is_exclusive_ptr!   (literal instantiations only)
//!         Rc<T> / Arc<T>      -> is_shared_ptr!
//! soft:   + declared wrappers -> is_exclusive_ptr_soft! / is_shared_ptr_soft!
//! unions: is_smart_ptr!, is_ptr! (raw pointers included), soft variants
//! ```
//!
//! ### 2. Capability (structure)
//! Does the type expose a named operation, regardless of its identity?
//!
//! ```text
//! has_reset!, has_release!, has_deleter!, has_swap!, is_pointable!
//! ```
//!
//! A value-holder type can carry capabilities while every identity predicate
//! is false, and `Rc<T>` has `has_reset!` but not `has_release!`.
//!
//! ## Mechanism
//!
//! We use the **Inherent Const Fallback** trick: a hidden fallback trait
//! supplies `false`, a bounded inherent const shadows it with `true` exactly
//! when the probed trait bound holds. Absence of a shape or capability
//! therefore resolves cleanly to `false`, never to a compile error.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), type-level If/And/Or                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Shape markers + Operations                              |
//! |  - kind (ExclusiveExact, SharedSoft, RawPointer, ...)             |
//! |  - ops  (Reset, Release, GetDeleter, Swap)                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - Detect probes, query macros, pointer_kind! extension           |
//! |  - dispatch (native vs synthesized operation selection)           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use ptr_caps::{is_shared_ptr, is_smart_ptr, has_release, has_reset};
//!
//! assert!(is_shared_ptr!(Rc<i32>));
//! assert!(is_smart_ptr!(Box<String>));
//! assert!(has_release!(Box<i32>));
//! // shared ownership never relinquishes to the caller
//! assert!(!has_release!(Rc<i32>));
//! assert!(has_reset!(Rc<i32>));
//! ```
//!
//! ## Limitation
//!
//! Probes resolve on **concrete types** at the query site. In a generic
//! `fn f<T>()` the fallback (`false`) always wins; constrain `T` with the
//! marker or operation traits instead.

// The canonical ownership types live in alloc.
extern crate alloc;

// Re-export paste for the probe/extension macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Shape markers + Operations
// =============================================================================
pub mod kind;
pub mod ops;

// =============================================================================
// Layer 2: Detection probes + User API
// =============================================================================
pub mod detect;
pub mod dispatch;

// Query macros (is_smart_ptr!, has_reset!, pointer_kind!, ...)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use detect::Detect;
pub use kind::{
    ExclusiveExact, ExclusiveSoft, RawPointer, SharedExact, SharedSoft,
};
pub use ops::{BoxDeleter, GetDeleter, Release, Reset, Swap};
pub use primitives::bool::{Absent, Bool, BoolNot, Elif, If, Present, SelectBool};

/// Common items for pointer classification.
pub mod prelude {
    pub use crate::detect::Detect;
    pub use crate::dispatch::{MethodImpl, NoImpl, StaticMethodImpl};
    pub use crate::kind::{
        ExclusiveExact, ExclusiveSoft, RawPointer, SharedExact, SharedSoft,
    };
    pub use crate::ops::{GetDeleter, Release, Reset, Swap};
    pub use crate::primitives::bool::{Absent, Bool, Present};
    // Query macros are #[macro_export] so they live at the crate root.
}

//! Inherent-const-fallback detection machinery.
//!
//! For each probed trait `T`:
//! 1. A fallback trait declares `const X: bool = false`
//! 2. The fallback is implemented for `Detect<X>` for all X
//! 3. An inherent const `X = true` exists for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::X`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! Absence of the trait therefore maps to `false` rather than a hard error,
//! and the probe never needs a value of the queried type.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the query site. It does
//! NOT work on opaque parameters in generic contexts like `fn foo<T>()`.

use core::marker::PhantomData;
use core::ops::Deref;

use crate::kind::{ExclusiveExact, ExclusiveSoft, RawPointer, SharedExact, SharedSoft};
use crate::ops::{GetDeleter, Release, Reset, Swap};

/// Detection probe type.
///
/// Each predicate is an associated `bool` const; the matching `*Fallback`
/// trait must be in scope for the `false` branch to resolve. The query
/// macros handle that import.
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a probed trait.
macro_rules! impl_probe {
    ($Trait:ident, $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: ?Sized + $Trait> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

// =============================================================================
// Identity axis
// =============================================================================

impl_probe!(ExclusiveExact, IS_EXCLUSIVE);
impl_probe!(SharedExact, IS_SHARED);
impl_probe!(ExclusiveSoft, IS_EXCLUSIVE_SOFT);
impl_probe!(SharedSoft, IS_SHARED_SOFT);
impl_probe!(RawPointer, IS_RAW);

// =============================================================================
// Capability axis
// =============================================================================

impl_probe!(Reset, HAS_RESET);
impl_probe!(GetDeleter, HAS_DELETER);
impl_probe!(Swap, HAS_SWAP);

// Dereference + member access, the non-raw half of the pointable predicate.
impl_probe!(Deref, DEREFS);

// Release consumes self, so the probed bound requires a sized type.
#[doc(hidden)]
pub trait ReleaseFallback {
    const HAS_RELEASE: bool = false;
}
impl<T: ?Sized> ReleaseFallback for Detect<T> {}
impl<T: Release> Detect<T> {
    pub const HAS_RELEASE: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::rc::Rc;

    #[test]
    fn test_inherent_shadows_fallback() {
        assert!(Detect::<Box<i32>>::IS_EXCLUSIVE);
        assert!(!Detect::<Rc<i32>>::IS_EXCLUSIVE);
        assert!(Detect::<Rc<i32>>::IS_SHARED);
        assert!(!Detect::<i32>::IS_SHARED);
    }

    #[test]
    fn test_absence_is_false_not_error() {
        struct Plain;
        assert!(!Detect::<Plain>::HAS_RESET);
        assert!(!Detect::<Plain>::HAS_RELEASE);
        assert!(!Detect::<Plain>::HAS_DELETER);
        assert!(!Detect::<Plain>::HAS_SWAP);
        assert!(!Detect::<Plain>::DEREFS);
        assert!(!Detect::<Plain>::IS_RAW);
    }
}

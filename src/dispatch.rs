//! Zero-overhead selection between a native operation and a synthesized one.
//!
//! Consumers of the capability predicates (generic pointer adapters) pick an
//! implementation path at compile time: when the wrapped type exposes the
//! native operation, call it; otherwise substitute an equivalent built from
//! other parts. The selection happens through type-level booleans, not `if`
//! branches on values.
//!
//! ## Example
//!
//! ```
//! use ptr_caps::dispatch::{pick, StaticMethodImpl};
//! use ptr_caps::has_reset;
//!
//! struct Native;
//! struct Synthesized;
//!
//! impl StaticMethodImpl<&'static str> for Native {
//!     fn call() -> &'static str { "native reset" }
//! }
//! impl StaticMethodImpl<&'static str> for Synthesized {
//!     fn call() -> &'static str { "synthesized reset" }
//! }
//!
//! assert_eq!(pick::<{ has_reset!(Box<i32>) }, Native, Synthesized, _>(), "native reset");
//! assert_eq!(pick::<{ has_reset!(i32) }, Native, Synthesized, _>(), "synthesized reset");
//! ```
//!
//! Whether a *required* operation with no viable path is a hard error is the
//! consumer's policy; this module only routes.

use crate::primitives::bool::{Absent, Bool, Present, SelectBool};

// =============================================================================
// Implementation carriers
// =============================================================================

/// A method implementation that can be type-selected.
pub trait MethodImpl<T: ?Sized, Output = ()> {
    fn call(value: &T) -> Output;
}

/// A static/associated function implementation (no value parameter).
pub trait StaticMethodImpl<Output = ()> {
    fn call() -> Output;
}

/// Fallback carrier for when no implementation path applies.
pub struct NoImpl;

impl<T: ?Sized, Output: Default> MethodImpl<T, Output> for NoImpl {
    #[inline(always)]
    fn call(_value: &T) -> Output {
        Output::default()
    }
}

impl<Output: Default> StaticMethodImpl<Output> for NoImpl {
    #[inline(always)]
    fn call() -> Output {
        Output::default()
    }
}

// =============================================================================
// Bool-driven calls
// =============================================================================

/// Call a value-taking implementation through a type-level boolean.
///
/// The static counterpart needs no extra trait: `Bool::static_dispatch`
/// already routes it, and [`pick`] goes through that.
pub trait BoolMethodCall<Then, Else, T: ?Sized, Output> {
    fn call(value: &T) -> Output;
}

impl<Then, Else, T: ?Sized, Output> BoolMethodCall<Then, Else, T, Output> for Present
where
    Then: MethodImpl<T, Output>,
{
    #[inline(always)]
    fn call(value: &T) -> Output {
        Then::call(value)
    }
}

impl<Then, Else, T: ?Sized, Output> BoolMethodCall<Then, Else, T, Output> for Absent
where
    Else: MethodImpl<T, Output>,
{
    #[inline(always)]
    fn call(value: &T) -> Output {
        Else::call(value)
    }
}

// =============================================================================
// Const-bool entry points
// =============================================================================

/// Run `Then::call()` or `Else::call()` depending on a predicate result.
///
/// `B` is normally a query-macro invocation at a concrete type, e.g.
/// `pick::<{ has_reset!(Box<i32>) }, Native, Synthesized, _>()`.
#[inline(always)]
pub fn pick<const B: bool, Then, Else, Output>() -> Output
where
    (): SelectBool<B>,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    <<() as SelectBool<B>>::Out as Bool>::static_dispatch::<Then, Else, Output>()
}

/// Like [`pick`], but routes a borrowed value into the chosen path.
#[inline(always)]
pub fn pick_on<const B: bool, Then, Else, T, Output>(value: &T) -> Output
where
    T: ?Sized,
    (): SelectBool<B>,
    <() as SelectBool<B>>::Out: BoolMethodCall<Then, Else, T, Output>,
{
    <<() as SelectBool<B>>::Out as BoolMethodCall<Then, Else, T, Output>>::call(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Yes;
    struct No;

    impl StaticMethodImpl<&'static str> for Yes {
        fn call() -> &'static str {
            "yes"
        }
    }

    impl StaticMethodImpl<&'static str> for No {
        fn call() -> &'static str {
            "no"
        }
    }

    impl MethodImpl<i32, i32> for Yes {
        fn call(value: &i32) -> i32 {
            *value + 1
        }
    }

    impl MethodImpl<i32, i32> for No {
        fn call(value: &i32) -> i32 {
            -*value
        }
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick::<true, Yes, No, _>(), "yes");
        assert_eq!(pick::<false, Yes, No, _>(), "no");
    }

    #[test]
    fn test_static_dispatch_through_bool() {
        // the type-level entry point pick() routes through
        assert_eq!(<Present as Bool>::static_dispatch::<Yes, No, _>(), "yes");
        assert_eq!(<Absent as Bool>::static_dispatch::<Yes, No, _>(), "no");
    }

    #[test]
    fn test_pick_on() {
        assert_eq!(pick_on::<true, Yes, No, _, _>(&41), 42);
        assert_eq!(pick_on::<false, Yes, No, _, _>(&41), -41);
    }

    #[test]
    fn test_no_impl_defaults() {
        struct Native;
        impl StaticMethodImpl<i32> for Native {
            fn call() -> i32 {
                7
            }
        }

        let n: i32 = pick::<false, Native, NoImpl, _>();
        assert_eq!(n, 0);
        let n: i32 = pick::<true, Native, NoImpl, _>();
        assert_eq!(n, 7);
    }
}

//! Query macros and the extension pattern.
//!
//! Every query macro takes a concrete type and evaluates to a `bool`
//! constant, usable in `const` contexts and const-generic arguments. The
//! aggregate predicates are plain `||` compositions of their components;
//! when a new pointer category is registered (see [`pointer_kind!`]) the
//! user re-derives their own aggregates the same way.

// =============================================================================
// Identity queries
// =============================================================================

/// True only for literal `Box` instantiations (under any `&`/`&mut` layers).
#[macro_export]
macro_rules! is_exclusive_ptr {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::ExclusiveExactFallback as _;
        $crate::detect::Detect::<$T>::IS_EXCLUSIVE
    }};
}

/// True only for literal `Rc` / `Arc` instantiations.
#[macro_export]
macro_rules! is_shared_ptr {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SharedExactFallback as _;
        $crate::detect::Detect::<$T>::IS_SHARED
    }};
}

/// True for `Box` and for wrapper types declared
/// [`ExclusiveSoft`](crate::kind::ExclusiveSoft).
#[macro_export]
macro_rules! is_exclusive_ptr_soft {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::ExclusiveSoftFallback as _;
        $crate::detect::Detect::<$T>::IS_EXCLUSIVE_SOFT
    }};
}

/// True for `Rc` / `Arc` and for wrapper types declared
/// [`SharedSoft`](crate::kind::SharedSoft).
#[macro_export]
macro_rules! is_shared_ptr_soft {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SharedSoftFallback as _;
        $crate::detect::Detect::<$T>::IS_SHARED_SOFT
    }};
}

/// Exact smart-pointer union: exclusive or shared.
#[macro_export]
macro_rules! is_smart_ptr {
    ($T:ty) => {
        $crate::is_exclusive_ptr!($T) || $crate::is_shared_ptr!($T)
    };
}

/// Soft smart-pointer union: exclusive-soft or shared-soft.
#[macro_export]
macro_rules! is_smart_ptr_soft {
    ($T:ty) => {
        $crate::is_exclusive_ptr_soft!($T) || $crate::is_shared_ptr_soft!($T)
    };
}

/// True for raw pointers (under any `&`/`&mut` layers).
#[macro_export]
macro_rules! is_raw_ptr {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::RawPointerFallback as _;
        $crate::detect::Detect::<$T>::IS_RAW
    }};
}

/// Pointer-like union: raw pointer or exact smart pointer.
#[macro_export]
macro_rules! is_ptr {
    ($T:ty) => {
        $crate::is_raw_ptr!($T) || $crate::is_smart_ptr!($T)
    };
}

/// Soft pointer-like union: raw pointer or soft smart pointer.
#[macro_export]
macro_rules! is_ptr_soft {
    ($T:ty) => {
        $crate::is_raw_ptr!($T) || $crate::is_smart_ptr_soft!($T)
    };
}

/// Capability union, independent of identity: a raw pointer, or any type
/// supporting dereference plus member access (`Deref`).
#[macro_export]
macro_rules! is_pointable {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::{DerefFallback as _, RawPointerFallback as _};
        $crate::detect::Detect::<$T>::IS_RAW || $crate::detect::Detect::<$T>::DEREFS
    }};
}

// =============================================================================
// Capability queries
// =============================================================================

/// Does the type expose the no-argument [`reset`](crate::ops::Reset)?
#[macro_export]
macro_rules! has_reset {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::ResetFallback as _;
        $crate::detect::Detect::<$T>::HAS_RESET
    }};
}

/// Does the type expose the ownership-relinquishing
/// [`release`](crate::ops::Release)?
#[macro_export]
macro_rules! has_release {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::ReleaseFallback as _;
        $crate::detect::Detect::<$T>::HAS_RELEASE
    }};
}

/// Does the type expose the [`get_deleter`](crate::ops::GetDeleter)
/// accessor?
#[macro_export]
macro_rules! has_deleter {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::GetDeleterFallback as _;
        $crate::detect::Detect::<$T>::HAS_DELETER
    }};
}

/// Does the type expose same-type, by-reference [`swap`](crate::ops::Swap)?
#[macro_export]
macro_rules! has_swap {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SwapFallback as _;
        $crate::detect::Detect::<$T>::HAS_SWAP
    }};
}

// =============================================================================
// implements! - generic trait probe (concrete types only)
// =============================================================================

/// Check if a concrete type implements a trait at compile time.
///
/// Self-contained per-call-site probe; works for arbitrary traits,
/// including the marker pairs generated by [`pointer_kind!`].
///
/// ```
/// use ptr_caps::implements;
///
/// trait PointerLike {}
/// impl PointerLike for *const u8 {}
///
/// assert!(implements!(*const u8, PointerLike));
/// assert!(!implements!(String, PointerLike));
/// ```
#[macro_export]
macro_rules! implements {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback {
            const HIT: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const HIT: bool = true;
        }

        __Probe::<$T>::HIT
    }};
}

// =============================================================================
// Extension pattern
// =============================================================================

/// Register a new pointer template as its own classification category.
///
/// Generates an exact/soft marker-trait pair following the same shape as
/// the canonical ones: the exact trait accepts only literal `$Ptr<T>`
/// instantiations, the soft trait additionally accepts wrapper types that
/// declare it, and both are lifted through `&`/`&mut` layers. The pointer
/// template must implement `Deref` (the soft convertibility requirement).
///
/// Aggregate predicates over the extended taxonomy are re-derived by the
/// caller as `||` compositions; existing predicates are never modified.
///
/// ```
/// use std::ops::Deref;
/// use ptr_caps::{implements, pointer_kind};
///
/// struct ValuePointer<T> { slot: T }
/// impl<T> Deref for ValuePointer<T> {
///     type Target = T;
///     fn deref(&self) -> &T { &self.slot }
/// }
///
/// pointer_kind!(pub ValuePointer => ValuePointer);
///
/// // Wrapper joins the soft category only:
/// struct Vptr<T>(ValuePointer<T>);
/// impl<T> Deref for Vptr<T> {
///     type Target = ValuePointer<T>;
///     fn deref(&self) -> &ValuePointer<T> { &self.0 }
/// }
/// impl<T> ValuePointerSoft for Vptr<T> {}
///
/// assert!(implements!(ValuePointer<i32>, ValuePointerExact));
/// assert!(!implements!(Vptr<i32>, ValuePointerExact));
/// assert!(implements!(Vptr<i32>, ValuePointerSoft));
/// ```
#[macro_export]
macro_rules! pointer_kind {
    ($vis:vis $Kind:ident => $Ptr:ident) => {
        $crate::paste::paste! {
            #[doc = "Matches only literal `" $Ptr "` instantiations, under any `&`/`&mut` layers."]
            $vis trait [<$Kind Exact>] {}
            impl<T> [<$Kind Exact>] for $Ptr<T> {}
            impl<'a, P: ?Sized + [<$Kind Exact>]> [<$Kind Exact>] for &'a P {}
            impl<'a, P: ?Sized + [<$Kind Exact>]> [<$Kind Exact>] for &'a mut P {}

            #[doc = "`" $Ptr "` itself, or a wrapper type that declares this marker."]
            $vis trait [<$Kind Soft>]: ::core::ops::Deref {}
            impl<T> [<$Kind Soft>] for $Ptr<T> {}
            impl<'a, P: ?Sized + [<$Kind Soft>]> [<$Kind Soft>] for &'a P {}
            impl<'a, P: ?Sized + [<$Kind Soft>]> [<$Kind Soft>] for &'a mut P {}
        }
    };
}

/// Declare a wrapper type exclusive-like (joins the soft-exclusive
/// category). The wrapper must implement `Deref`.
#[macro_export]
macro_rules! exclusive_like {
    (impl<$($g:ident),+> $W:ty) => {
        impl<$($g),+> $crate::kind::ExclusiveSoft for $W {}
    };
    ($W:ty) => {
        impl $crate::kind::ExclusiveSoft for $W {}
    };
}

/// Declare a wrapper type shared-like (joins the soft-shared category).
/// The wrapper must implement `Deref`.
#[macro_export]
macro_rules! shared_like {
    (impl<$($g:ident),+> $W:ty) => {
        impl<$($g),+> $crate::kind::SharedSoft for $W {}
    };
    ($W:ty) => {
        impl $crate::kind::SharedSoft for $W {}
    };
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::sync::Arc;

    #[test]
    fn test_exact_queries() {
        assert!(is_exclusive_ptr!(Box<i32>));
        assert!(!is_exclusive_ptr!(Rc<i32>));
        assert!(is_shared_ptr!(Rc<i32>));
        assert!(is_shared_ptr!(Arc<i32>));
        assert!(!is_shared_ptr!(Box<i32>));
        assert!(!is_smart_ptr!(i32));
    }

    #[test]
    fn test_unions_are_const() {
        const SMART: bool = is_smart_ptr!(Box<u8>);
        const PTR: bool = is_ptr!(*mut u8);
        assert!(SMART);
        assert!(PTR);
    }

    #[test]
    fn test_capability_queries() {
        assert!(has_reset!(Box<i32>));
        assert!(has_release!(Box<i32>));
        assert!(has_deleter!(Box<i32>));
        assert!(has_swap!(Box<i32>));

        assert!(has_reset!(Rc<i32>));
        assert!(!has_release!(Rc<i32>));
        assert!(!has_deleter!(Rc<i32>));
        assert!(has_swap!(Rc<i32>));
    }
}

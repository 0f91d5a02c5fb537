//! Exact-shape classifiers for the canonical ownership types.
//!
//! `ExclusiveExact` accepts only `Box<T>`; `SharedExact` accepts only
//! `Rc<T>` and `Arc<T>`. Both are sealed: the exact categories are closed
//! sets, and no downstream type can ever satisfy them. Wrapper types belong
//! in the [`soft`](crate::kind::soft) family instead.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

mod sealed {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::sync::Arc;

    pub trait ExclusiveSealed {}
    impl<T: ?Sized> ExclusiveSealed for Box<T> {}
    impl<'a, P: ?Sized + ExclusiveSealed> ExclusiveSealed for &'a P {}
    impl<'a, P: ?Sized + ExclusiveSealed> ExclusiveSealed for &'a mut P {}

    pub trait SharedSealed {}
    impl<T: ?Sized> SharedSealed for Rc<T> {}
    impl<T: ?Sized> SharedSealed for Arc<T> {}
    impl<'a, P: ?Sized + SharedSealed> SharedSealed for &'a P {}
    impl<'a, P: ?Sized + SharedSealed> SharedSealed for &'a mut P {}
}

/// Matches only literal `Box` instantiations, over any referent (sized or
/// not), seen through any number of `&`/`&mut` layers.
pub trait ExclusiveExact: sealed::ExclusiveSealed {}

impl<T: ?Sized> ExclusiveExact for Box<T> {}
impl<'a, P: ?Sized + ExclusiveExact> ExclusiveExact for &'a P {}
impl<'a, P: ?Sized + ExclusiveExact> ExclusiveExact for &'a mut P {}

/// Matches only literal `Rc` / `Arc` instantiations, over any referent, seen
/// through any number of `&`/`&mut` layers.
pub trait SharedExact: sealed::SharedSealed {}

impl<T: ?Sized> SharedExact for Rc<T> {}
impl<T: ?Sized> SharedExact for Arc<T> {}
impl<'a, P: ?Sized + SharedExact> SharedExact for &'a P {}
impl<'a, P: ?Sized + SharedExact> SharedExact for &'a mut P {}

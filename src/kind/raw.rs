//! The built-in pointer shapes.

mod sealed {
    pub trait RawSealed {}
    impl<T: ?Sized> RawSealed for *const T {}
    impl<T: ?Sized> RawSealed for *mut T {}
    impl<'a, P: ?Sized + RawSealed> RawSealed for &'a P {}
    impl<'a, P: ?Sized + RawSealed> RawSealed for &'a mut P {}
}

/// `*const T` or `*mut T`, seen through any number of `&`/`&mut` layers.
///
/// Sealed: raw-pointer-ness is a property of the language, not something a
/// user type can declare.
pub trait RawPointer: sealed::RawSealed {}

impl<T: ?Sized> RawPointer for *const T {}
impl<T: ?Sized> RawPointer for *mut T {}
impl<'a, P: ?Sized + RawPointer> RawPointer for &'a P {}
impl<'a, P: ?Sized + RawPointer> RawPointer for &'a mut P {}

//! Canonical operation impls for the ownership types.
//!
//! The capability profile these establish:
//!
//! | type     | reset | release | deleter | swap |
//! |----------|-------|---------|---------|------|
//! | `Box<T>` | yes   | yes     | yes     | yes  |
//! | `Rc<T>`  | yes   | no      | no      | yes  |
//! | `Arc<T>` | yes   | no      | no      | yes  |
//!
//! Shared ownership never relinquishes the referent to the caller and never
//! exposes a destruction policy, so `Rc`/`Arc` lack `Release` and
//! `GetDeleter` on purpose.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::marker::PhantomData;
use core::mem;

use super::{GetDeleter, Release, Reset, Swap};

impl<T: Default> Reset for Box<T> {
    fn reset(&mut self) {
        **self = T::default();
    }
}

impl<T: Default> Reset for Rc<T> {
    fn reset(&mut self) {
        *self = Rc::new(T::default());
    }
}

impl<T: Default> Reset for Arc<T> {
    fn reset(&mut self) {
        *self = Arc::new(T::default());
    }
}

impl<T> Release for Box<T> {
    type Inner = T;

    fn release(self) -> T {
        *self
    }
}

/// The implicit drop policy of `Box<T>`.
///
/// `Box` has no deleter type parameter; this zero-sized stand-in is what its
/// deleter accessor hands out.
pub struct BoxDeleter<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> BoxDeleter<T> {
    /// Destroy a box the way its owner would have.
    pub fn delete(&self, target: Box<T>) {
        drop(target);
    }
}

impl<T: ?Sized> Clone for BoxDeleter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for BoxDeleter<T> {}

impl<T> GetDeleter for Box<T> {
    type Deleter = BoxDeleter<T>;

    fn get_deleter(&self) -> BoxDeleter<T> {
        BoxDeleter(PhantomData)
    }
}

impl<T: ?Sized> Swap for Box<T> {
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T: ?Sized> Swap for Rc<T> {
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T: ?Sized> Swap for Arc<T> {
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_profile() {
        let mut a = Box::new(3);
        let mut b = Box::new(4);
        a.swap(&mut b);
        assert_eq!((*a, *b), (4, 3));

        a.reset();
        assert_eq!(*a, 0);

        let deleter = b.get_deleter();
        deleter.delete(b);

        assert_eq!(a.release(), 0);
    }

    #[test]
    fn test_shared_profile() {
        let mut a = Rc::new(7);
        a.reset();
        assert_eq!(*a, 0);

        let mut b = Arc::new(1);
        let mut c = Arc::new(2);
        b.swap(&mut c);
        assert_eq!((*b, *c), (2, 1));
    }
}

//! Wrapper-aware ("soft") classifiers.
//!
//! Exact matching fails for user types that wrap a canonical pointer to add
//! methods while keeping its ownership semantics. The soft markers close
//! that gap: the canonical types carry them, and a wrapper opts in by
//! declaring the marker (typically via [`exclusive_like!`] or
//! [`shared_like!`]).
//!
//! The `Deref` supertrait is the convertibility requirement: a soft member
//! must reach its pointee the way the base pointer does. A wrapper that does
//! not declare the marker stays out of the category — the analogue of a
//! base conversion that is inaccessible.
//!
//! [`exclusive_like!`]: crate::exclusive_like
//! [`shared_like!`]: crate::shared_like

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::ops::Deref;

/// `Box` itself, or a wrapper type declared to own exclusively the way
/// `Box` does.
pub trait ExclusiveSoft: Deref {}

impl<T: ?Sized> ExclusiveSoft for Box<T> {}
impl<'a, P: ?Sized + ExclusiveSoft> ExclusiveSoft for &'a P {}
impl<'a, P: ?Sized + ExclusiveSoft> ExclusiveSoft for &'a mut P {}

/// `Rc` / `Arc`, or a wrapper type declared to share ownership the way
/// they do.
pub trait SharedSoft: Deref {}

impl<T: ?Sized> SharedSoft for Rc<T> {}
impl<T: ?Sized> SharedSoft for Arc<T> {}
impl<'a, P: ?Sized + SharedSoft> SharedSoft for &'a P {}
impl<'a, P: ?Sized + SharedSoft> SharedSoft for &'a mut P {}

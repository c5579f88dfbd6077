use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

/// Single-threaded shared owner for mutable UI state.
///
/// Stores `T` inside an `Rc<RefCell<...>>`. Callbacks that may outlive the
/// owner (frame callbacks, animation completions) should hold a
/// [`WeakOwned`] instead of a clone.
pub struct Owned<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Owned<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Owned<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Borrow the stored value immutably.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Borrow the stored value mutably.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Create a non-owning handle to the same value.
    pub fn downgrade(&self) -> WeakOwned<T> {
        WeakOwned {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Non-owning counterpart of [`Owned`].
pub struct WeakOwned<T> {
    inner: Weak<RefCell<T>>,
}

impl<T> Clone for WeakOwned<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakOwned<T> {
    /// Returns the owner if it is still alive.
    pub fn upgrade(&self) -> Option<Owned<T>> {
        self.inner.upgrade().map(|inner| Owned { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_handle_dies_with_last_owner() {
        let owned = Owned::new(3);
        let weak = owned.downgrade();
        assert_eq!(weak.upgrade().map(|o| *o.borrow()), Some(3));

        *owned.borrow_mut() += 1;
        assert_eq!(weak.upgrade().map(|o| *o.borrow()), Some(4));

        drop(owned);
        assert!(weak.upgrade().is_none());
    }
}

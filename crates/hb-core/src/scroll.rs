//! Viewport and scroll-lock seams
//!
//! The DOM implementations live in the UI crate; tests use recording fakes.

use std::rc::Rc;

/// Something whose scroll offset can be set
pub trait Viewport {
    fn scroll_to(&self, x: f64, y: f64);
}

/// Document-wide scroll suspension
///
/// `lock` and `unlock` are not reference counted. Callers go through
/// [`ScrollLockGuard`] so every lock is paired with exactly one unlock.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

impl<T: Viewport + ?Sized> Viewport for Rc<T> {
    fn scroll_to(&self, x: f64, y: f64) {
        (**self).scroll_to(x, y)
    }
}

impl<T: ScrollLock + ?Sized> ScrollLock for Rc<T> {
    fn lock(&self) {
        (**self).lock()
    }

    fn unlock(&self) {
        (**self).unlock()
    }
}

/// Holds the scroll lock for as long as it lives
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        tracing::trace!("scroll lock acquired");
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
        tracing::trace!("scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting {
        locks: Cell<u32>,
        unlocks: Cell<u32>,
    }

    impl ScrollLock for Counting {
        fn lock(&self) {
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    #[test]
    fn test_guard_pairs_lock_and_unlock() {
        let lock = Rc::new(Counting::default());
        {
            let _guard = ScrollLockGuard::acquire(lock.clone());
            assert_eq!(lock.locks.get(), 1);
            assert_eq!(lock.unlocks.get(), 0);
        }
        assert_eq!(lock.unlocks.get(), 1);
    }

    #[test]
    fn test_guard_released_on_unwind() {
        let lock = Rc::new(Counting::default());
        let inner = lock.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = ScrollLockGuard::acquire(inner);
            panic!("handler failed");
        }));
        assert!(result.is_err());
        assert_eq!(lock.locks.get(), 1);
        assert_eq!(lock.unlocks.get(), 1);
    }
}

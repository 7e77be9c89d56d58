//! Lock shim so `Game` has one mutex type with or without `std`.

/// Poison-tolerant wrapper around [`std::sync::Mutex`].
///
/// Every `Game` operation checks its preconditions before writing, so the
/// guarded data is consistent even if a caller panicked while holding it.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

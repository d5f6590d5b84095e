// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::sync::Mutex as StdMutex;
use std::sync::MutexGuard;
use std::sync::TryLockError;

/// A mutual exclusion primitive identical to `std::sync::Mutex` except its
/// methods panic on poison instead of returning a `Result`.
#[derive(Default)]
pub struct Mutex<T: ?Sized> {
    lock: StdMutex<T>,
}

impl<T> Mutex<T> {
    /// Creates a new `Mutex` in an unlocked state ready for use.
    pub fn new(v: T) -> Mutex<T> {
        Mutex {
            lock: StdMutex::new(v),
        }
    }

    /// Consumes the mutex, returning the underlying data.
    pub fn into_inner(self) -> T {
        match self.lock.into_inner() {
            Ok(v) => v,
            Err(_) => panic!("mutex is poisoned"),
        }
    }
}

impl<T: ?Sized> Mutex<T> {
    /// Acquires the mutex, blocking the current thread until the lock is
    /// available.
    pub fn lock(&self) -> MutexGuard<T> {
        match self.lock.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("mutex is poisoned"),
        }
    }

    /// Attempts to acquire the mutex without blocking. Returns `None` if the
    /// lock is currently held by another thread.
    pub fn try_lock(&self) -> Option<MutexGuard<T>> {
        match self.lock.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::WouldBlock) => None,
            Err(TryLockError::Poisoned(_)) => panic!("mutex is poisoned"),
        }
    }

    /// Returns a mutable reference to the underlying data without locking;
    /// the exclusive borrow of the mutex already guarantees sole access.
    pub fn get_mut(&mut self) -> &mut T {
        match self.lock.get_mut() {
            Ok(v) => v,
            Err(_) => panic!("mutex is poisoned"),
        }
    }
}

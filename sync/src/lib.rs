// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Sync primitive types whose methods panic rather than returning error in
//! case of poison.
//!
//! A mutex is poisoned when a thread panics while the lock is held, leaving
//! the guarded data in a possibly inconsistent state. Release builds abort
//! on panic, so poison never occurs there; elsewhere these wrappers take
//! the process down instead of handing callers a `PoisonError`.

mod mutex;

pub use crate::mutex::Mutex;

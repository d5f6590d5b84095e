// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The seam between this crate's devices and the machine's system bus.

use std::fmt;

use crate::suspendable::Suspendable;

/// Information about how a device was accessed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BusAccessInfo {
    /// Offset from the start of the device's address range.
    pub offset: u64,
    /// Absolute address of the access on the bus.
    pub address: u64,
    /// Hart that initiated the access.
    pub id: usize,
}

// Implement `Display` so that it can be used in logging.
impl fmt::Display for BusAccessInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A device mapped into the guest physical address space.
///
/// Accesses never fault back to the guest: a device that cannot service an
/// access logs it, reads zero and drops the write.
pub trait BusDevice: Send + Suspendable {
    /// Returns a label suitable for debug output.
    fn debug_label(&self) -> String;

    /// Reads `data.len()` bytes at `info.offset` from this device.
    fn read(&mut self, info: BusAccessInfo, data: &mut [u8]);

    /// Writes `data` at `info.offset` into this device.
    fn write(&mut self, info: BusAccessInfo, data: &[u8]);
}

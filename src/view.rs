// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Per-mode MMIO windows onto the CLIC register file.

use std::sync::Arc;

use log::warn;
use sync::Mutex;

use crate::bus::BusAccessInfo;
use crate::bus::BusDevice;
use crate::clic::Clic;
use crate::registers::PrivilegeMode;
use crate::suspendable::Suspendable;

/// One privilege mode's window onto a shared [`Clic`].
///
/// Every guest access reaches the controller through a view. The view
/// carries the access mode the decoder filters with, and it denies accesses
/// issued while the hart runs below that mode.
pub struct ClicView {
    access_mode: PrivilegeMode,
    base_address: u64,
    hart_id: usize,
    clic: Arc<Mutex<Clic>>,
}

impl ClicView {
    pub(crate) fn new(
        access_mode: PrivilegeMode,
        base_address: u64,
        hart_id: usize,
        clic: Arc<Mutex<Clic>>,
    ) -> ClicView {
        ClicView {
            access_mode,
            base_address,
            hart_id,
            clic,
        }
    }

    pub fn access_mode(&self) -> PrivilegeMode {
        self.access_mode
    }

    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    /// Bytes of MMIO space this view occupies.
    pub fn len(&self) -> u64 {
        self.clic.lock().region_len()
    }
}

impl BusDevice for ClicView {
    fn debug_label(&self) -> String {
        format!("clic{} {} view", self.hart_id, self.access_mode)
    }

    fn read(&mut self, info: BusAccessInfo, data: &mut [u8]) {
        let clic = self.clic.lock();
        if self.access_mode > clic.hart_privilege() {
            warn!("{}: denied read at {}", self.debug_label(), info);
            data.fill(0);
            return;
        }
        clic.mmio_read(self.access_mode, info.offset, data);
    }

    fn write(&mut self, info: BusAccessInfo, data: &[u8]) {
        let mut clic = self.clic.lock();
        if self.access_mode > clic.hart_privilege() {
            warn!("{}: denied write at {}", self.debug_label(), info);
            return;
        }
        clic.mmio_write(self.access_mode, info.offset, data);
    }
}

impl Suspendable for ClicView {
    fn sleep(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn wake(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn snapshot(&mut self) -> anyhow::Result<serde_json::Value> {
        self.clic.lock().snapshot()
    }

    fn restore(&mut self, data: serde_json::Value) -> anyhow::Result<()> {
        self.clic.lock().restore(data)
    }
}

// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Device model for the RISC-V core-local interrupt controller (CLIC).
//!
//! One [`Clic`] serves a single hart: it accepts up to 4096 interrupt input
//! lines, records their pending/enable/attribute/control state, arbitrates
//! among the enabled sources with a mode+level+priority total order, and
//! posts at most one interrupt at a time to the CPU. The controller is
//! reached through per-privilege-mode MMIO views; supervisor and user views
//! are filtered projections of the machine register file, so a source owned
//! by a higher mode reads as zero and silently drops writes.
//!
//! The machine model plugs in at three seams: views implement [`BusDevice`]
//! for the system bus, the CPU supplies a [`HartState`] for privilege and
//! interrupt-level queries, and delivery raises an [`InterruptLine`] whose
//! exception code is read back through [`Clic::exccode`].

mod active_set;
mod bus;
mod clic;
pub mod registers;
mod suspendable;
mod view;

pub use crate::bus::BusAccessInfo;
pub use crate::bus::BusDevice;
pub use crate::clic::Clic;
pub use crate::clic::ClicError;
pub use crate::clic::ClicParameters;
pub use crate::clic::ClicVersion;
pub use crate::clic::HartState;
pub use crate::clic::InterruptLine;
pub use crate::registers::PrivilegeMode;
pub use crate::registers::Trigger;
pub use crate::suspendable::Suspendable;
pub use crate::view::ClicView;

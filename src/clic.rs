// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Core-local interrupt controller (CLIC) device model for RISC-V.
//!
//! One `Clic` serves a single hart. It records pending, enable, attribute
//! and control state for up to 4096 interrupt sources, arbitrates among the
//! enabled ones with a mode+level+priority total order, and posts at most
//! one interrupt at a time to the CPU. Supervisor and user MMIO views are
//! filtered projections of the machine register file: a source owned by a
//! higher mode reads as zero and drops writes.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::ensure;
use anyhow::Context;
use log::warn;
use remain::sorted;
use serde::Deserialize;
use serde::Serialize;
use sync::Mutex;
use thiserror::Error;

use crate::active_set::ActiveSet;
use crate::registers::attr_mode_bits;
use crate::registers::attr_shv;
use crate::registers::attr_with_mode;
use crate::registers::clicinfo;
use crate::registers::encode_exccode;
use crate::registers::intctl_read;
use crate::registers::level;
use crate::registers::PrivilegeMode;
use crate::registers::Trigger;
use crate::registers::CLICCFG_MNLBITS_MASK;
use crate::registers::CLICCFG_NMBITS_MASK;
use crate::registers::CLICCFG_NMBITS_SHIFT;
use crate::registers::CLICCFG_SNLBITS_BYTE;
use crate::registers::CLICCFG_UNLBITS_BYTE;
use crate::registers::CLICINFO;
use crate::registers::CLICINTATTR_SHV;
use crate::registers::CLICINTATTR_WRITE_MASK;
use crate::registers::CLICINTTRIG_BASE;
use crate::registers::CLICINTTRIG_COUNT;
use crate::registers::CLICINTTRIG_WRITE_MASK;
use crate::registers::CLICINT_BASE;
use crate::registers::CLICINT_SIZE;
use crate::registers::MAX_CTLBITS;
use crate::registers::MAX_NLBITS;
use crate::registers::MAX_SOURCES;
use crate::registers::VIEW_ALIGN;
use crate::view::ClicView;

/// Register interface revisions this model implements.
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ClicVersion {
    /// Draft v0.9 register interface.
    #[serde(rename = "v0.9")]
    V0_9,
    /// Draft v0.9 with jump-table vectoring on the CPU side.
    #[serde(rename = "v0.9-jmp")]
    V0_9Jmp,
}

impl FromStr for ClicVersion {
    type Err = ClicError;

    fn from_str(s: &str) -> Result<ClicVersion, ClicError> {
        match s {
            "v0.9" => Ok(ClicVersion::V0_9),
            "v0.9-jmp" => Ok(ClicVersion::V0_9Jmp),
            _ => Err(ClicError::UnknownVersion(s.to_owned())),
        }
    }
}

/// Construction-time configuration of one hart's CLIC.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClicParameters {
    /// Base address of the machine-mode register view. 4 KiB aligned.
    pub mclic_base: u64,
    /// Base address of the supervisor-mode view, or zero when S is absent.
    #[serde(default)]
    pub sclic_base: u64,
    /// Base address of the user-mode view, or zero when U is absent.
    #[serde(default)]
    pub uclic_base: u64,
    #[serde(default)]
    pub hart_id: usize,
    /// Number of interrupt input lines, at most 4096.
    pub num_sources: usize,
    /// Implemented high bits of `clicintctl`, at most 8.
    pub ctlbits: u8,
    pub version: ClicVersion,
    /// Selective hardware vectoring. When false, `clicintattr.shv` is
    /// hardwired to zero.
    #[serde(default = "default_shv")]
    pub shv_enabled: bool,
}

fn default_shv() -> bool {
    true
}

#[sorted]
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ClicError {
    #[error("register view base {0:#x} is not 4 KiB aligned")]
    MisalignedBase(u64),
    #[error("the machine-mode view requires a non-zero base address")]
    MissingMachineBase,
    #[error("clicintctlbits {0} exceeds the 8 bits of clicintctl")]
    TooManyCtlBits(u8),
    #[error("{0} interrupt sources exceed the CLIC limit of 4096")]
    TooManySources(usize),
    #[error("unknown CLIC version {0:?}")]
    UnknownVersion(String),
    #[error("a CLIC needs at least one interrupt source")]
    ZeroSources,
}

/// Interrupt-related hart state the controller samples while arbitrating
/// and while checking access privilege.
///
/// Implementations are called with the CLIC lock held and must not reach
/// back into the controller.
pub trait HartState: Send + Sync {
    /// The hart's current operating privilege.
    fn privilege(&self) -> PrivilegeMode;

    /// Active interrupt level for `mode`, from `mintstatus.xil`.
    fn interrupt_level(&self, mode: PrivilegeMode) -> u8;

    /// Interrupt level threshold for `mode`, from `xintthresh`.
    fn threshold(&self, mode: PrivilegeMode) -> u8;
}

/// Outbound interrupt line to the CPU.
///
/// The arbiter raises the line when it posts an interrupt; the exception
/// code is read out-of-band through [`Clic::exccode`]. A miss leaves the
/// line untouched, the CPU observes absence on its own sampling path.
pub trait InterruptLine: Send + Sync {
    fn set_level(&self, level: bool);
}

/// The `cliccfg` fields. nlbits fields stay within [0, 8] and `nmbits`
/// never exceeds the number of supported lower-privilege modes.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
struct ClicCfg {
    mnlbits: u8,
    snlbits: u8,
    unlbits: u8,
    nmbits: u8,
}

#[derive(Deserialize, Serialize)]
struct ClicSnapshot {
    cfg: ClicCfg,
    intip: Vec<u8>,
    intie: Vec<u8>,
    intattr: Vec<u8>,
    intctl: Vec<u8>,
    line_level: Vec<bool>,
    inttrig: [u32; CLICINTTRIG_COUNT],
    exccode: Option<u32>,
}

pub struct Clic {
    hart_id: usize,
    num_sources: usize,
    ctlbits: u8,
    supports_s: bool,
    supports_u: bool,
    shv_enabled: bool,
    jump_table: bool,
    version: ClicVersion,

    cfg: ClicCfg,
    intip: Vec<u8>,
    intie: Vec<u8>,
    intattr: Vec<u8>,
    intctl: Vec<u8>,
    line_level: Vec<bool>,
    inttrig: [u32; CLICINTTRIG_COUNT],

    active: ActiveSet,
    exccode: Option<u32>,

    hart: Arc<dyn HartState>,
    line: Arc<dyn InterruptLine>,
}

impl Clic {
    /// Validates `params` and builds the controller together with one MMIO
    /// view per supported privilege mode (machine first).
    pub fn create(
        params: &ClicParameters,
        hart: Arc<dyn HartState>,
        line: Arc<dyn InterruptLine>,
    ) -> Result<(Arc<Mutex<Clic>>, Vec<ClicView>), ClicError> {
        if params.num_sources == 0 {
            return Err(ClicError::ZeroSources);
        }
        if params.num_sources > MAX_SOURCES {
            return Err(ClicError::TooManySources(params.num_sources));
        }
        if params.ctlbits > MAX_CTLBITS {
            return Err(ClicError::TooManyCtlBits(params.ctlbits));
        }
        if params.mclic_base == 0 {
            return Err(ClicError::MissingMachineBase);
        }
        for base in [params.mclic_base, params.sclic_base, params.uclic_base] {
            if base % VIEW_ALIGN != 0 {
                return Err(ClicError::MisalignedBase(base));
            }
        }

        let num_sources = params.num_sources;
        let clic = Clic {
            hart_id: params.hart_id,
            num_sources,
            ctlbits: params.ctlbits,
            supports_s: params.sclic_base != 0,
            supports_u: params.uclic_base != 0,
            shv_enabled: params.shv_enabled,
            jump_table: params.version == ClicVersion::V0_9Jmp,
            version: params.version,
            cfg: ClicCfg::default(),
            intip: vec![0; num_sources],
            intie: vec![0; num_sources],
            // Every source is machine-owned out of reset.
            intattr: vec![attr_with_mode(0, PrivilegeMode::Machine.bits()); num_sources],
            intctl: vec![0; num_sources],
            line_level: vec![false; num_sources],
            inttrig: [0; CLICINTTRIG_COUNT],
            active: ActiveSet::new(),
            exccode: None,
            hart,
            line,
        };
        let supports_s = clic.supports_s;
        let supports_u = clic.supports_u;

        let clic = Arc::new(Mutex::new(clic));
        let mut views = vec![ClicView::new(
            PrivilegeMode::Machine,
            params.mclic_base,
            params.hart_id,
            clic.clone(),
        )];
        if supports_s {
            views.push(ClicView::new(
                PrivilegeMode::Supervisor,
                params.sclic_base,
                params.hart_id,
                clic.clone(),
            ));
        }
        if supports_u {
            views.push(ClicView::new(
                PrivilegeMode::User,
                params.uclic_base,
                params.hart_id,
                clic.clone(),
            ));
        }
        Ok((clic, views))
    }

    pub fn hart_id(&self) -> usize {
        self.hart_id
    }

    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    pub fn version(&self) -> ClicVersion {
        self.version
    }

    /// Whether vectored delivery goes through a jump table (`v0.9-jmp`).
    pub fn uses_jump_table(&self) -> bool {
        self.jump_table
    }

    /// The exception code of the most recently posted interrupt.
    pub fn exccode(&self) -> Option<u32> {
        self.exccode
    }

    /// Bytes of MMIO space each view occupies.
    pub fn region_len(&self) -> u64 {
        CLICINT_BASE + self.num_sources as u64 * CLICINT_SIZE
    }

    pub(crate) fn hart_privilege(&self) -> PrivilegeMode {
        self.hart.privilege()
    }

    /// Drives the external input line of `irq` to `level`.
    pub fn service_irq(&mut self, irq: usize, level: bool) {
        if irq >= self.num_sources {
            warn!(
                "clic{}: line transition on unknown irq {}",
                self.hart_id, irq
            );
            return;
        }
        self.line_level[irq] = level;
        let trig = Trigger::from_attr(self.intattr[irq]);
        if trig.is_edge() && level != trig.active_low() {
            self.intip[irq] = 1;
        }
        self.next_interrupt();
    }

    /// Reads `data.len()` bytes at `offset` through a view of `access` mode.
    pub(crate) fn mmio_read(&self, access: PrivilegeMode, offset: u64, data: &mut [u8]) {
        data.fill(0);
        if !self.check_access(access, offset, data.len()) {
            return;
        }
        let mut unknown = false;
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = self.read_byte(access, offset + i as u64, &mut unknown);
        }
        if unknown {
            warn!(
                "clic{}: {}-mode read of unimplemented register at {:#x}",
                self.hart_id, access, offset
            );
        }
    }

    /// Writes `data` at `offset` through a view of `access` mode.
    pub(crate) fn mmio_write(&mut self, access: PrivilegeMode, offset: u64, data: &[u8]) {
        if !self.check_access(access, offset, data.len()) {
            return;
        }
        let mut unknown = false;
        for (i, byte) in data.iter().enumerate() {
            self.write_byte(access, offset + i as u64, *byte, &mut unknown);
        }
        if unknown {
            warn!(
                "clic{}: dropped {}-mode write to read-only or unimplemented register at {:#x}",
                self.hart_id, access, offset
            );
        }
    }

    pub fn snapshot(&self) -> anyhow::Result<serde_json::Value> {
        serde_json::to_value(ClicSnapshot {
            cfg: self.cfg,
            intip: self.intip.clone(),
            intie: self.intie.clone(),
            intattr: self.intattr.clone(),
            intctl: self.intctl.clone(),
            line_level: self.line_level.clone(),
            inttrig: self.inttrig,
            exccode: self.exccode,
        })
        .context("failed to serialize Clic")
    }

    pub fn restore(&mut self, data: serde_json::Value) -> anyhow::Result<()> {
        let snap: ClicSnapshot =
            serde_json::from_value(data).context("failed to deserialize Clic")?;
        ensure!(
            snap.intip.len() == self.num_sources,
            "snapshot of {} sources restored into a CLIC with {}",
            snap.intip.len(),
            self.num_sources
        );
        self.cfg = snap.cfg;
        self.intip = snap.intip;
        self.intie = snap.intie;
        self.intattr = snap.intattr;
        self.intctl = snap.intctl;
        self.line_level = snap.line_level;
        self.inttrig = snap.inttrig;
        self.exccode = snap.exccode;
        self.rebuild_active();
        Ok(())
    }

    /// How many lower-privilege modes `nmbits` may select among.
    fn max_nmbits(&self) -> u8 {
        self.supports_s as u8 + self.supports_u as u8
    }

    fn nlbits(&self, mode: PrivilegeMode) -> u8 {
        match mode {
            PrivilegeMode::Machine => self.cfg.mnlbits,
            PrivilegeMode::Supervisor => self.cfg.snlbits,
            PrivilegeMode::User => self.cfg.unlbits,
        }
    }

    /// The privilege mode that owns an interrupt with the raw two-bit
    /// `mode_bits`, under the current `nmbits`.
    fn effective_mode(&self, mode_bits: u8) -> PrivilegeMode {
        match self.cfg.nmbits {
            0 => PrivilegeMode::Machine,
            1 => {
                let lower = if self.supports_s {
                    PrivilegeMode::Supervisor
                } else {
                    PrivilegeMode::User
                };
                if mode_bits <= PrivilegeMode::Supervisor.bits() {
                    lower
                } else {
                    PrivilegeMode::Machine
                }
            }
            // The reserved encoding is never stored; writes retain the
            // prior mode instead.
            _ => PrivilegeMode::from_bits(mode_bits).unwrap_or(PrivilegeMode::Machine),
        }
    }

    /// WARL coercion for a written attribute mode field: the legal value to
    /// store given the written bits and the previously stored bits.
    fn coerce_mode_bits(&self, written: u8, prior: u8) -> u8 {
        if self.cfg.nmbits == 2 && PrivilegeMode::from_bits(written).is_none() {
            prior
        } else {
            self.effective_mode(written).bits()
        }
    }

    fn irq_mode(&self, irq: usize) -> PrivilegeMode {
        self.effective_mode(attr_mode_bits(self.intattr[irq]))
    }

    /// Whether a source owned by `irq_mode` is visible through a view of
    /// `access` mode.
    fn visible(&self, access: PrivilegeMode, irq_mode: PrivilegeMode) -> bool {
        if !self.supports_s && !self.supports_u {
            return access == PrivilegeMode::Machine;
        }
        match self.cfg.nmbits {
            0 => access == PrivilegeMode::Machine,
            1 => {
                access == PrivilegeMode::Machine || irq_mode <= PrivilegeMode::Supervisor
            }
            _ => access >= irq_mode,
        }
    }

    fn intcfg(&self, irq: usize) -> u16 {
        u16::from(self.irq_mode(irq).bits()) << 8 | u16::from(self.intctl[irq])
    }

    /// Observable `clicintip` bit. Level-triggered sources track the input
    /// line, inverted for active-low; edge-triggered sources latch.
    fn pending_bit(&self, irq: usize) -> u8 {
        let trig = Trigger::from_attr(self.intattr[irq]);
        if trig.is_edge() {
            self.intip[irq]
        } else {
            (self.line_level[irq] != trig.active_low()) as u8
        }
    }

    fn check_access(&self, access: PrivilegeMode, offset: u64, len: usize) -> bool {
        if !matches!(len, 1 | 2 | 4 | 8) || offset % len as u64 != 0 {
            warn!(
                "clic{}: misaligned {}-mode access of {} bytes at {:#x}",
                self.hart_id, access, len, offset
            );
            return false;
        }
        let end = offset.checked_add(len as u64).unwrap_or(u64::MAX);
        if end > self.region_len() {
            if offset >= CLICINT_BASE {
                warn!(
                    "clic{}: {}-mode access at {:#x} names a source past the last of {}",
                    self.hart_id, access, offset, self.num_sources
                );
            } else {
                warn!(
                    "clic{}: {}-mode access at {:#x} is outside the register file",
                    self.hart_id, access, offset
                );
            }
            return false;
        }
        true
    }

    fn read_byte(&self, access: PrivilegeMode, offset: u64, unknown: &mut bool) -> u8 {
        if offset >= CLICINT_BASE {
            let rel = offset - CLICINT_BASE;
            return self.read_irq_byte(access, (rel / CLICINT_SIZE) as usize, rel % CLICINT_SIZE);
        }
        let inttrig_end = CLICINTTRIG_BASE + (CLICINTTRIG_COUNT as u64) * 4;
        if offset < CLICINFO {
            self.read_cliccfg_byte(access, offset)
        } else if offset < CLICINFO + 4 {
            (clicinfo(self.num_sources, self.ctlbits) >> (8 * (offset - CLICINFO))) as u8
        } else if (CLICINTTRIG_BASE..inttrig_end).contains(&offset) {
            let rel = offset - CLICINTTRIG_BASE;
            (self.inttrig[(rel / 4) as usize] >> (8 * (rel % 4))) as u8
        } else {
            *unknown = true;
            0
        }
    }

    fn write_byte(&mut self, access: PrivilegeMode, offset: u64, value: u8, unknown: &mut bool) {
        if offset >= CLICINT_BASE {
            let rel = offset - CLICINT_BASE;
            self.write_irq_byte(access, (rel / CLICINT_SIZE) as usize, rel % CLICINT_SIZE, value);
            return;
        }
        let inttrig_end = CLICINTTRIG_BASE + (CLICINTTRIG_COUNT as u64) * 4;
        if offset < CLICINFO {
            let old = self.cfg;
            self.write_cliccfg_byte(access, offset, value);
            if self.cfg != old {
                // nmbits and nlbits feed every effective mode and level.
                self.rebuild_active();
                self.next_interrupt();
            }
        } else if offset < CLICINFO + 4 {
            *unknown = true;
        } else if (CLICINTTRIG_BASE..inttrig_end).contains(&offset) {
            let rel = offset - CLICINTTRIG_BASE;
            let idx = (rel / 4) as usize;
            let shift = 8 * (rel % 4);
            let reg = (self.inttrig[idx] & !(0xff << shift)) | u32::from(value) << shift;
            self.inttrig[idx] = reg & CLICINTTRIG_WRITE_MASK;
        } else {
            *unknown = true;
        }
    }

    /// A view of mode A reads the `cliccfg` fields of modes at or below A;
    /// fields above it read zero.
    fn read_cliccfg_byte(&self, access: PrivilegeMode, byte: u64) -> u8 {
        match byte {
            0 if access == PrivilegeMode::Machine => {
                self.cfg.mnlbits | self.cfg.nmbits << CLICCFG_NMBITS_SHIFT
            }
            CLICCFG_SNLBITS_BYTE if access >= PrivilegeMode::Supervisor => self.cfg.snlbits,
            CLICCFG_UNLBITS_BYTE => self.cfg.unlbits,
            _ => 0,
        }
    }

    /// Writes honor the same per-view field ownership as reads. nlbits
    /// values clamp to 8; an out-of-range `nmbits` keeps the prior value;
    /// unsupported modes' fields stay hardwired to zero.
    fn write_cliccfg_byte(&mut self, access: PrivilegeMode, byte: u64, value: u8) {
        match byte {
            0 if access == PrivilegeMode::Machine => {
                self.cfg.mnlbits = (value & CLICCFG_MNLBITS_MASK).min(MAX_NLBITS);
                let nmbits = (value >> CLICCFG_NMBITS_SHIFT) & CLICCFG_NMBITS_MASK;
                if nmbits <= self.max_nmbits() {
                    self.cfg.nmbits = nmbits;
                }
            }
            CLICCFG_SNLBITS_BYTE
                if access >= PrivilegeMode::Supervisor && self.supports_s =>
            {
                self.cfg.snlbits = (value & CLICCFG_MNLBITS_MASK).min(MAX_NLBITS);
            }
            CLICCFG_UNLBITS_BYTE if self.supports_u => {
                self.cfg.unlbits = (value & CLICCFG_MNLBITS_MASK).min(MAX_NLBITS);
            }
            _ => {}
        }
    }

    fn read_irq_byte(&self, access: PrivilegeMode, irq: usize, reg: u64) -> u8 {
        if !self.visible(access, self.irq_mode(irq)) {
            return 0;
        }
        match reg {
            0 => self.pending_bit(irq),
            1 => self.intie[irq],
            2 => self.intattr[irq],
            _ => intctl_read(self.intctl[irq], self.ctlbits),
        }
    }

    fn write_irq_byte(&mut self, access: PrivilegeMode, irq: usize, reg: u64, value: u8) {
        if !self.visible(access, self.irq_mode(irq)) {
            return;
        }
        match reg {
            0 => self.set_pending(irq, value),
            1 => self.set_enable(irq, value),
            2 => self.set_attr(irq, value),
            _ => self.set_ctl(irq, value),
        }
    }

    /// MMIO write to `clicintip`. Level-triggered pending is read-only from
    /// software; it tracks the input line.
    fn set_pending(&mut self, irq: usize, value: u8) {
        if !Trigger::from_attr(self.intattr[irq]).is_edge() {
            return;
        }
        let value = value & 1;
        if self.intip[irq] != value {
            self.intip[irq] = value;
            self.next_interrupt();
        }
    }

    fn set_enable(&mut self, irq: usize, value: u8) {
        let value = value & 1;
        if self.intie[irq] == value {
            return;
        }
        self.intie[irq] = value;
        let intcfg = self.intcfg(irq);
        if value != 0 {
            self.active.insert(intcfg, irq as u16);
        } else {
            self.active.remove(intcfg, irq as u16);
        }
        self.next_interrupt();
    }

    fn set_attr(&mut self, irq: usize, value: u8) {
        let mut value = value & CLICINTATTR_WRITE_MASK;
        if !self.shv_enabled {
            value &= !CLICINTATTR_SHV;
        }
        let prior = self.intattr[irq];
        let mode_bits = self.coerce_mode_bits(attr_mode_bits(value), attr_mode_bits(prior));
        let value = attr_with_mode(value, mode_bits);
        // A hart may only hand a source to a mode it could itself enter.
        if self.hart.privilege() < self.effective_mode(mode_bits) {
            return;
        }
        if prior == value {
            return;
        }
        let old_intcfg = self.intcfg(irq);
        self.intattr[irq] = value;
        if self.intie[irq] != 0 {
            let new_intcfg = self.intcfg(irq);
            if new_intcfg != old_intcfg {
                self.active.remove(old_intcfg, irq as u16);
                self.active.insert(new_intcfg, irq as u16);
            }
        }
        self.next_interrupt();
    }

    fn set_ctl(&mut self, irq: usize, value: u8) {
        if self.intctl[irq] == value {
            return;
        }
        let old_intcfg = self.intcfg(irq);
        self.intctl[irq] = value;
        if self.intie[irq] != 0 {
            self.active.remove(old_intcfg, irq as u16);
            self.active.insert(self.intcfg(irq), irq as u16);
        }
        self.next_interrupt();
    }

    fn rebuild_active(&mut self) {
        self.active.clear();
        for irq in 0..self.num_sources {
            if self.intie[irq] != 0 {
                self.active.insert(self.intcfg(irq), irq as u16);
            }
        }
    }

    /// Scans the active set for the highest-ranked deliverable interrupt
    /// and posts it to the CPU.
    fn next_interrupt(&mut self) {
        if self.active.is_empty() {
            return;
        }
        let hart_mode = self.hart.privilege();
        let mut posted = None;
        for entry in self.active.iter() {
            let mode = PrivilegeMode::from_bits((entry.intcfg >> 8) as u8)
                .unwrap_or(PrivilegeMode::Machine);
            if mode < hart_mode {
                break;
            }
            let level = level(entry.intcfg as u8, self.nlbits(mode), self.ctlbits);
            if mode == hart_mode {
                let floor = self
                    .hart
                    .interrupt_level(mode)
                    .max(self.hart.threshold(mode));
                if level < floor {
                    break;
                }
            }
            if self.pending_bit(entry.irq as usize) != 0 {
                posted = Some((entry.irq, mode, level));
                break;
            }
        }
        let Some((irq, mode, level)) = posted else {
            return;
        };
        let attr = self.intattr[irq as usize];
        if attr_shv(attr) && Trigger::from_attr(attr).is_edge() {
            // Vectored edge interrupts are consumed at delivery.
            self.intip[irq as usize] = 0;
        }
        self.exccode = Some(encode_exccode(irq, mode, level));
        self.line.set_level(true);
    }
}

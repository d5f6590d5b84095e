// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A device that can be put to sleep and have its state saved and restored.
pub trait Suspendable {
    /// Stops any side effects. The device must not change its externally
    /// observable state between `sleep` and the next `wake`.
    fn sleep(&mut self) -> anyhow::Result<()>;

    /// Resumes from `sleep`.
    fn wake(&mut self) -> anyhow::Result<()>;

    /// Serializes the device state so it can be written to disk alongside
    /// the rest of the machine.
    fn snapshot(&mut self) -> anyhow::Result<serde_json::Value>;

    /// Replaces the device state with a previously taken `snapshot`. The
    /// device must have been constructed with the same configuration.
    fn restore(&mut self, data: serde_json::Value) -> anyhow::Result<()>;
}

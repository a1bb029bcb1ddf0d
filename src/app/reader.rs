//! Sensor reader.
//!
//! Reading needs the channel returned by
//! [`Selection::select_sensor`](super::addressing::Selection::select_sensor),
//! so a read cannot be issued before a sensor has been selected.  The call
//! busy-waits inside the sampler; a conversion that never completes is a
//! fatal hang, not an error.
//!
//! This is the only place a sample is range-checked: whatever the sampler
//! returns is clamped to [`MAX_READING`] before it reaches the controller.

use log::trace;

use crate::matrix::{MAX_READING, Reading, SensorChannel};

use super::ports::SamplerPort;

/// Perform one blocking conversion on `channel`.
pub fn read(hw: &mut impl SamplerPort, channel: SensorChannel) -> Reading {
    let reading = hw.convert(channel).min(MAX_READING);
    trace!("reader: row {} -> {}", channel.row().index(), reading);
    reading
}

//! The telemetry document POSTed to the collector.

use crate::types::SensorReading;
use chrono::{DateTime, Datelike, Timelike, Utc};
use core::fmt::Write;
use heapless::String;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct TelemetryPayload {
    pub timestamp: String<20>,
    pub temperature: Option<f32>,
    pub humidity: Option<f32>,
    #[serde(rename = "lightLevel")]
    pub light_level: u16,
    #[serde(rename = "binLevel")]
    pub bin_level: f32,
}

impl TelemetryPayload {
    /// Assembles a payload from this cycle's reading and its derived fill
    /// level, timestamped at second resolution.
    pub fn new(now: &DateTime<Utc>, reading: &SensorReading, bin_level: f32) -> Self {
        Self {
            timestamp: format_timestamp(now),
            temperature: reading.temperature,
            humidity: reading.humidity,
            light_level: reading.light_level,
            bin_level,
        }
    }
}

fn format_timestamp(time: &DateTime<Utc>) -> String<20> {
    let mut s = String::new();

    // 19 characters, cannot exceed the buffer
    let _ = write!(
        s,
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    );

    s
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrameRateError;

/// A validated frame rate in frames per second
///
/// Always positive and finite. Construct it with [`FrameRate::new`] or by
/// parsing a string; both reject zero, negative, NaN and infinite values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FrameRate(f64);

impl FrameRate {
    /// Create a frame rate from a raw value
    pub fn new(fps: f64) -> Result<Self, FrameRateError> {
        if !fps.is_finite() {
            return Err(FrameRateError::NotFinite { value: fps });
        }
        if fps <= 0.0 {
            return Err(FrameRateError::NonPositive { value: fps });
        }
        Ok(Self(fps))
    }

    /// Get frame rate as f64
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Get frame duration in seconds
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.0
    }

    /// Elapsed seconds at the start of `frame`
    pub fn seconds_at(&self, frame: u64) -> f64 {
        frame as f64 / self.0
    }
}

impl FromStr for FrameRate {
    type Err = FrameRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed.parse().map_err(|_| FrameRateError::NotANumber {
            input: trimmed.to_string(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for FrameRate {
    type Error = FrameRateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FrameRate> for f64 {
    fn from(fps: FrameRate) -> Self {
        fps.0
    }
}

impl fmt::Display for FrameRate {
    /// Whole rates keep one decimal place (`24.0`), others print as entered (`23.976`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0 < 1e16 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Elapsed time split into display fields
///
/// Every field is truncated, never rounded, so a value of `0.9996` seconds
/// is `00:00:00.999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub milliseconds: u16,
}

impl Timecode {
    /// Split a non-negative number of seconds
    pub fn from_seconds(total_seconds: f64) -> Self {
        let total_seconds = total_seconds.max(0.0);
        Self {
            hours: (total_seconds / 3600.0).floor() as u64,
            minutes: ((total_seconds % 3600.0) / 60.0).floor() as u8,
            seconds: (total_seconds % 60.0).floor() as u8,
            milliseconds: ((total_seconds % 1.0) * 1000.0).floor() as u16,
        }
    }

    /// Elapsed time at `frame` for the given rate
    pub fn from_frame(frame: u64, fps: FrameRate) -> Self {
        Self::from_seconds(fps.seconds_at(frame))
    }

    /// Total milliseconds represented by the fields, saturating at `u64::MAX`
    pub fn as_millis(&self) -> u64 {
        self.hours
            .saturating_mul(3_600_000)
            .saturating_add(self.minutes as u64 * 60_000)
            .saturating_add(self.seconds as u64 * 1000)
            .saturating_add(self.milliseconds as u64)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_parse() {
        let fps: FrameRate = "23.976".parse().unwrap();
        assert_eq!(fps.as_f64(), 23.976);

        let padded: FrameRate = "  25 \n".parse().unwrap();
        assert_eq!(padded.as_f64(), 25.0);
    }

    #[test]
    fn test_frame_rate_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<FrameRate>(),
            Err(FrameRateError::NotANumber { input: "abc".to_string() })
        );
        assert_eq!(
            "0".parse::<FrameRate>(),
            Err(FrameRateError::NonPositive { value: 0.0 })
        );
        assert_eq!(
            "-25".parse::<FrameRate>(),
            Err(FrameRateError::NonPositive { value: -25.0 })
        );
        assert!(matches!(
            "inf".parse::<FrameRate>(),
            Err(FrameRateError::NotFinite { .. })
        ));
        assert!(matches!(
            "NaN".parse::<FrameRate>(),
            Err(FrameRateError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_frame_rate_display() {
        assert_eq!(FrameRate::new(23.976).unwrap().to_string(), "23.976");
        assert_eq!(FrameRate::new(29.97).unwrap().to_string(), "29.97");
        assert_eq!(FrameRate::new(24.0).unwrap().to_string(), "24.0");
    }

    #[test]
    fn test_timecode_truncates() {
        let tc = Timecode::from_seconds(0.9996);
        assert_eq!(tc.to_string(), "00:00:00.999");

        let tc = Timecode::from_seconds(3661.5);
        assert_eq!(tc.to_string(), "01:01:01.500");
        assert_eq!(tc.as_millis(), 3_661_500);
    }

    #[test]
    fn test_as_millis_saturates() {
        let tc = Timecode {
            hours: u64::MAX / 1000,
            minutes: 59,
            seconds: 59,
            milliseconds: 999,
        };
        assert_eq!(tc.as_millis(), u64::MAX);
    }

    #[test]
    fn test_timecode_wide_hours() {
        let tc = Timecode::from_seconds(360_000.0);
        assert_eq!(tc.to_string(), "100:00:00.000");
    }
}

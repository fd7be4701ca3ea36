// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type for the ceiling fan control.
//!
//! This module provides a type-safe representation of the four discrete
//! fan settings exposed by the control panel.

use std::fmt;

use crate::error::ValueError;

/// Discrete fan speed setting (0-3).
///
/// The fan knows exactly four positions; anything else is rejected at
/// construction time.
///
/// # Examples
///
/// ```
/// use homesim_lib::types::FanSpeed;
///
/// let speed = FanSpeed::new(2).unwrap();
/// assert_eq!(speed, FanSpeed::Medium);
/// assert_eq!(speed.as_num(), 2);
///
/// // Out-of-range requests return an error
/// assert!(FanSpeed::new(4).is_err());
/// assert!(FanSpeed::new(-1).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum FanSpeed {
    /// Fan is stopped. This is the power-on default and the fail-safe value.
    #[default]
    Off,
    /// Lowest speed.
    Low,
    /// Medium speed.
    Medium,
    /// Highest speed.
    High,
}

impl FanSpeed {
    /// Minimum speed ordinal.
    pub const MIN: u8 = 0;

    /// Maximum speed ordinal.
    pub const MAX: u8 = 3;

    /// Creates a fan speed from a raw operator request.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFanSpeed` if `value` is outside [0, 3].
    pub fn new(value: i32) -> Result<Self, ValueError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_num)
            .ok_or(ValueError::InvalidFanSpeed(value))
    }

    /// Maps a speed ordinal back to its variant.
    ///
    /// Returns `None` for ordinals above [`Self::MAX`].
    #[must_use]
    pub const fn from_num(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the speed ordinal (0-3).
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns the panel label for this speed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Returns whether the fan is stopped.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i32> for FanSpeed {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_valid() {
        for v in 0..=3 {
            let speed = FanSpeed::new(v).unwrap();
            assert_eq!(i32::from(speed.as_num()), v);
        }
    }

    #[test]
    fn fan_speed_invalid() {
        assert_eq!(FanSpeed::new(4), Err(ValueError::InvalidFanSpeed(4)));
        assert_eq!(FanSpeed::new(-1), Err(ValueError::InvalidFanSpeed(-1)));
        assert_eq!(
            FanSpeed::new(i32::MAX),
            Err(ValueError::InvalidFanSpeed(i32::MAX))
        );
    }

    #[test]
    fn fan_speed_default_is_off() {
        assert_eq!(FanSpeed::default(), FanSpeed::Off);
        assert!(FanSpeed::default().is_off());
    }

    #[test]
    fn fan_speed_num_round_trip() {
        for speed in [FanSpeed::Off, FanSpeed::Low, FanSpeed::Medium, FanSpeed::High] {
            assert_eq!(FanSpeed::from_num(speed.as_num()), Some(speed));
        }
        assert_eq!(FanSpeed::from_num(4), None);
    }

    #[test]
    fn fan_speed_display() {
        assert_eq!(FanSpeed::Off.to_string(), "OFF");
        assert_eq!(FanSpeed::High.to_string(), "HIGH");
    }

    #[test]
    fn fan_speed_ordering() {
        assert!(FanSpeed::Off < FanSpeed::Low);
        assert!(FanSpeed::Medium < FanSpeed::High);
    }
}

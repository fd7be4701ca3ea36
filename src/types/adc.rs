// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated ADC sample type.
//!
//! This module provides a type-safe representation of a 10-bit
//! analog-to-digital converter sample and its conversion to a temperature.
//! The model is an LM35-style sensor on a 0-5V reference: 10 mV per degree,
//! so full scale reads 500 °C.

use std::fmt;

use crate::error::ValueError;

/// A 10-bit ADC sample (0-1023).
///
/// # Examples
///
/// ```
/// use homesim_lib::types::AdcReading;
///
/// let reading = AdcReading::new(512).unwrap();
/// assert_eq!(reading.value(), 512);
/// assert!((reading.to_celsius() - 250.24).abs() < 0.01);
///
/// // Samples outside the converter's range are rejected
/// assert!(AdcReading::new(1024).is_err());
/// assert!(AdcReading::new(-1).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AdcReading(u16);

impl AdcReading {
    /// Lowest possible sample.
    pub const MIN: Self = Self(0);

    /// Highest possible sample (full scale on a 10-bit converter).
    pub const MAX: Self = Self(1023);

    /// Creates a new ADC sample.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is outside [0, 1023].
    pub fn new(value: i32) -> Result<Self, ValueError> {
        if !(i32::from(Self::MIN.0)..=i32::from(Self::MAX.0)).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: i32::from(Self::MIN.0),
                max: i32::from(Self::MAX.0),
                actual: value,
            });
        }
        // Safe: range checked above, so the value fits in u16
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = value as u16;
        Ok(Self(value))
    }

    /// Returns the raw sample value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Converts the sample to degrees Celsius.
    ///
    /// The sample is scaled against the 1023-count full range, the 5V
    /// reference, and the sensor's 100 °C-per-volt slope, in that order,
    /// entirely in 32-bit float arithmetic.
    #[must_use]
    pub fn to_celsius(&self) -> f32 {
        (f32::from(self.0) / 1023.0) * 5.0 * 100.0
    }
}

impl fmt::Display for AdcReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for AdcReading {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

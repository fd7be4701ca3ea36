// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light selector type.
//!
//! The house has exactly three switchable lights. The panel addresses them
//! by the numbers 1-3; this module turns that numeric selection into a
//! closed enumeration before any state is touched.

use std::fmt;

use crate::error::ValueError;

/// One of the three house lights.
///
/// # Examples
///
/// ```
/// use homesim_lib::types::Light;
///
/// // Panel selectors 1-3 map onto the three lights
/// let light = Light::new(2).unwrap();
/// assert_eq!(light, Light::Kitchen);
/// assert_eq!(light.selector(), 2);
///
/// // Anything else is rejected before any light changes state
/// assert!(Light::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Light {
    /// The room light (selector 1).
    Room,
    /// The kitchen light (selector 2).
    Kitchen,
    /// The hall light (selector 3).
    Hall,
}

impl Light {
    /// All lights, in panel order.
    pub const ALL: [Self; 3] = [Self::Room, Self::Kitchen, Self::Hall];

    /// Creates a light from its panel selector (1-3).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidSelection` for selectors outside 1-3.
    pub fn new(selector: i32) -> Result<Self, ValueError> {
        match selector {
            1 => Ok(Self::Room),
            2 => Ok(Self::Kitchen),
            3 => Ok(Self::Hall),
            other => Err(ValueError::InvalidSelection(other)),
        }
    }

    /// Returns the panel selector for this light (1-3).
    #[must_use]
    pub const fn selector(&self) -> u8 {
        match self {
            Self::Room => 1,
            Self::Kitchen => 2,
            Self::Hall => 3,
        }
    }

    /// Returns the panel label for this light.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "Room Light",
            Self::Kitchen => "Kitchen Light",
            Self::Hall => "Hall Light",
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i32> for Light {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_valid_selectors() {
        assert_eq!(Light::new(1).unwrap(), Light::Room);
        assert_eq!(Light::new(2).unwrap(), Light::Kitchen);
        assert_eq!(Light::new(3).unwrap(), Light::Hall);
    }

    #[test]
    fn light_invalid_selectors() {
        for selector in [0, 4, -1, 99] {
            assert_eq!(
                Light::new(selector),
                Err(ValueError::InvalidSelection(selector))
            );
        }
    }

    #[test]
    fn light_selector_round_trip() {
        for light in Light::ALL {
            assert_eq!(Light::new(i32::from(light.selector())).unwrap(), light);
        }
    }

    #[test]
    fn light_display() {
        assert_eq!(Light::Room.to_string(), "Room Light");
        assert_eq!(Light::Kitchen.to_string(), "Kitchen Light");
        assert_eq!(Light::Hall.to_string(), "Hall Light");
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the simulated controls.
//!
//! This module provides type-safe representations of the values accepted by
//! the control panel. Each type ensures values are within their valid ranges
//! at construction time, so the rest of the library never sees a raw,
//! unchecked integer.
//!
//! # Types
//!
//! - [`Light`] - Selector for one of the three house lights
//! - [`FanSpeed`] - Discrete fan setting (OFF/LOW/MEDIUM/HIGH)
//! - [`AdcReading`] - Simulated 10-bit ADC sample (0-1023)

mod adc;
mod fan;
mod light;

pub use adc::AdcReading;
pub use fan::FanSpeed;
pub use light::Light;

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HomeSim` library.
//!
//! This module provides the error hierarchy for the simulation: value
//! validation, door-lock access control, and settings persistence.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when driving
/// the simulated control panel.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during door-lock authentication.
    #[error("access error: {0}")]
    Access(#[from] AccessError),

    /// Error occurred while persisting or restoring settings.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when raw operator input fails the bounds check of
/// the control it is aimed at.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },

    /// An unrecognized light selector was provided.
    #[error("unrecognized light selector: {0}")]
    InvalidSelection(i32),

    /// A fan speed outside the valid range (0-3) was requested.
    ///
    /// The fan falls back to `OFF` when this is raised; see
    /// [`HomeState::set_fan_speed`](crate::HomeState::set_fan_speed).
    #[error("invalid fan speed: {0} (valid speeds are 0-3)")]
    InvalidFanSpeed(i32),
}

/// Errors related to door-lock authentication.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// All passcode attempts were used up without a match.
    #[error("access denied after {attempts} failed attempts")]
    Denied {
        /// Number of attempts that were made.
        attempts: u8,
    },
}

/// Errors related to the persisted settings record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The settings file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is shorter than one full record.
    #[error("record truncated: expected {expected} bytes, found {found}")]
    Truncated {
        /// Required record size in bytes.
        expected: usize,
        /// Actual number of bytes available.
        found: usize,
    },

    /// A field read back from the record holds an impossible value.
    #[error("invalid {field} in record: {value}")]
    InvalidField {
        /// The field that failed validation.
        field: &'static str,
        /// The raw value found in the record.
        value: u32,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

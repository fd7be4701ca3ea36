// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door-lock access control.
//!
//! The front door opens after a correct passcode, with a budget of three
//! attempts per try. The unlocked condition is transient: nothing about it
//! is stored in [`HomeState`](crate::HomeState), and every new approach to
//! the door starts with a fresh attempt budget.
//!
//! The passcode is the factory default `"1234"`, compared as plain bytes.
//! That is a faithful rendition of the simulated panel, not a security
//! mechanism.
//!
//! # Examples
//!
//! ```
//! use homesim_lib::access::{DoorLock, UnlockAttempt};
//!
//! let mut lock = DoorLock::new();
//! assert_eq!(lock.try_passcode("0000"), UnlockAttempt::Retry { remaining: 2 });
//! assert_eq!(lock.try_passcode("1234"), UnlockAttempt::Granted);
//! ```

use crate::error::AccessError;

/// Factory-default door passcode.
const PASSCODE: &str = "1234";

/// Outcome of a single passcode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockAttempt {
    /// The passcode matched; the door is open.
    Granted,
    /// The passcode did not match and `remaining` attempts are left.
    Retry {
        /// Attempts left before the lock refuses further input.
        remaining: u8,
    },
    /// The attempt budget is used up; the door stays locked.
    Denied,
}

/// Bounded-attempt door lock.
///
/// A `DoorLock` accepts up to [`DoorLock::MAX_ATTEMPTS`] passcode attempts.
/// Once the budget is exhausted it answers [`UnlockAttempt::Denied`] to
/// everything, including the correct passcode. Create a new lock to start
/// over.
#[derive(Debug, Clone)]
pub struct DoorLock {
    remaining: u8,
}

impl DoorLock {
    /// Attempts allowed per approach to the door.
    pub const MAX_ATTEMPTS: u8 = 3;

    /// Creates a lock with a full attempt budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: Self::MAX_ATTEMPTS,
        }
    }

    /// Returns how many attempts are left.
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Checks one passcode candidate against the lock.
    pub fn try_passcode(&mut self, candidate: &str) -> UnlockAttempt {
        if self.remaining == 0 {
            return UnlockAttempt::Denied;
        }
        if candidate == PASSCODE {
            return UnlockAttempt::Granted;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            tracing::warn!("passcode attempts exhausted, door stays locked");
            UnlockAttempt::Denied
        } else {
            tracing::warn!(remaining = self.remaining, "wrong passcode");
            UnlockAttempt::Retry {
                remaining: self.remaining,
            }
        }
    }
}

impl Default for DoorLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one full unlock dialogue against a passcode source.
///
/// Pulls candidates from `passcode_source` until one matches or
/// [`DoorLock::MAX_ATTEMPTS`] candidates have been rejected. The source is
/// called exactly once per attempt and never after the outcome is decided.
///
/// # Errors
///
/// Returns `AccessError::Denied` when every attempt was used without a
/// match.
///
/// # Examples
///
/// ```
/// use homesim_lib::access::attempt_unlock;
///
/// assert!(attempt_unlock(|| "1234".to_string()).is_ok());
/// assert!(attempt_unlock(|| "guess".to_string()).is_err());
/// ```
pub fn attempt_unlock<F>(mut passcode_source: F) -> Result<(), AccessError>
where
    F: FnMut() -> String,
{
    let mut lock = DoorLock::new();
    loop {
        match lock.try_passcode(&passcode_source()) {
            UnlockAttempt::Granted => return Ok(()),
            UnlockAttempt::Retry { .. } => {}
            UnlockAttempt::Denied => {
                return Err(AccessError::Denied {
                    attempts: DoorLock::MAX_ATTEMPTS,
                });
            }
        }
    }
}

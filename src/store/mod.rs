// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Settings persistence.
//!
//! This module handles saving and loading the house state to/from disk,
//! standing in for the EEPROM a real panel would use. The on-disk format
//! is a fixed [`RECORD_LEN`](EepromStore::RECORD_LEN)-byte record with all
//! fields pinned to 4-byte little-endian; saving fully replaces the
//! previous record.
//!
//! # Examples
//!
//! ```no_run
//! use homesim_lib::state::HomeState;
//! use homesim_lib::store::EepromStore;
//! use homesim_lib::types::Light;
//!
//! # fn main() -> homesim_lib::Result<()> {
//! let store = EepromStore::new("eeprom.bin");
//!
//! let mut state = HomeState::new();
//! state.toggle_light(Light::Room);
//! store.save(&state)?;
//!
//! let restored = store.load()?;
//! assert_eq!(restored, state);
//! # Ok(())
//! # }
//! ```

mod record;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::state::HomeState;

/// File-backed store for one settings record.
///
/// The store owns the path it writes to; create one per simulated EEPROM.
#[derive(Debug, Clone)]
pub struct EepromStore {
    path: PathBuf,
}

impl EepromStore {
    /// Size of the persisted record, in bytes.
    pub const RECORD_LEN: usize = record::RECORD_LEN;

    /// Creates a store backed by the given file path.
    ///
    /// Nothing is touched on disk until [`save`](Self::save) or
    /// [`load`](Self::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves a state, fully replacing any previous record.
    ///
    /// The record is staged in a sibling file and renamed into place, so a
    /// crash mid-write leaves the previous record intact. The staging file
    /// lives next to the target to keep the rename on one filesystem.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the record cannot be written.
    pub fn save(&self, state: &HomeState) -> Result<(), StoreError> {
        let staged = self.path.with_extension("tmp");
        fs::write(&staged, record::encode(state))?;
        fs::rename(&staged, &self.path)?;

        tracing::info!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Loads the persisted state.
    ///
    /// The whole file is buffered and validated before any state is
    /// constructed, so a failed load never hands back a partially-read
    /// record; callers keep their current state on error. Bytes past the
    /// record length are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read,
    /// `StoreError::Truncated` if it is shorter than one record, and
    /// `StoreError::InvalidField` if a field fails validation.
    pub fn load(&self) -> Result<HomeState, StoreError> {
        let bytes = fs::read(&self.path)?;
        if bytes.len() < record::RECORD_LEN {
            return Err(StoreError::Truncated {
                expected: record::RECORD_LEN,
                found: bytes.len(),
            });
        }

        let mut buf = [0u8; record::RECORD_LEN];
        buf.copy_from_slice(&bytes[..record::RECORD_LEN]);
        let state = record::decode(&buf)?;

        tracing::info!(path = %self.path.display(), "settings loaded");
        Ok(state)
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-layout settings record codec.
//!
//! One [`HomeState`] is persisted as a 20-byte record with no header,
//! version tag, or checksum:
//!
//! | Offset | Size | Field            | Encoding                      |
//! |--------|------|------------------|-------------------------------|
//! | 0      | 4    | room light       | u32 LE, 0 = off, nonzero = on |
//! | 4      | 4    | kitchen light    | u32 LE                        |
//! | 8      | 4    | hall light       | u32 LE                        |
//! | 12     | 4    | fan speed        | u32 LE, 0-3; others rejected  |
//! | 16     | 4    | last temperature | f32 LE                        |
//!
//! Every field is pinned to 4-byte little-endian so a record written on one
//! machine reads back identically on any other. Encoding always writes 0/1
//! for the light switches; any nonzero word is read back as on.

use crate::error::StoreError;
use crate::state::HomeState;
use crate::types::{FanSpeed, Light};

/// Size of one encoded field, in bytes.
const FIELD_LEN: usize = 4;

/// Size of one full settings record, in bytes.
pub const RECORD_LEN: usize = 5 * FIELD_LEN;

/// Encodes a state into one settings record.
pub(crate) fn encode(state: &HomeState) -> [u8; RECORD_LEN] {
    let words: [u32; 4] = [
        u32::from(state.light(Light::Room)),
        u32::from(state.light(Light::Kitchen)),
        u32::from(state.light(Light::Hall)),
        u32::from(state.fan_speed().as_num()),
    ];

    let mut record = [0u8; RECORD_LEN];
    for (i, word) in words.iter().enumerate() {
        record[i * FIELD_LEN..(i + 1) * FIELD_LEN].copy_from_slice(&word.to_le_bytes());
    }
    record[4 * FIELD_LEN..].copy_from_slice(&state.last_temperature().to_le_bytes());
    record
}

/// Decodes one settings record back into a state.
///
/// # Errors
///
/// Returns `StoreError::InvalidField` if the fan-speed word is outside 0-3.
pub(crate) fn decode(record: &[u8; RECORD_LEN]) -> Result<HomeState, StoreError> {
    let word = |index: usize| -> u32 {
        let mut buf = [0u8; FIELD_LEN];
        buf.copy_from_slice(&record[index * FIELD_LEN..(index + 1) * FIELD_LEN]);
        u32::from_le_bytes(buf)
    };

    let fan_word = word(3);
    let fan_speed = u8::try_from(fan_word)
        .ok()
        .and_then(FanSpeed::from_num)
        .ok_or(StoreError::InvalidField {
            field: "fan speed",
            value: fan_word,
        })?;

    let mut temperature = [0u8; FIELD_LEN];
    temperature.copy_from_slice(&record[4 * FIELD_LEN..]);

    Ok(HomeState::from_stored(
        word(0) != 0,
        word(1) != 0,
        word(2) != 0,
        fan_speed,
        f32::from_le_bytes(temperature),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> HomeState {
        let mut state = HomeState::new();
        state.set_light(Light::Room, true);
        state.set_light(Light::Hall, true);
        state.set_fan_speed(2).unwrap();
        state
    }

    #[test]
    fn encode_pins_the_layout() {
        let record = encode(&sample_state());

        let mut expected = Vec::with_capacity(RECORD_LEN);
        expected.extend_from_slice(&1u32.to_le_bytes()); // room on
        expected.extend_from_slice(&0u32.to_le_bytes()); // kitchen off
        expected.extend_from_slice(&1u32.to_le_bytes()); // hall on
        expected.extend_from_slice(&2u32.to_le_bytes()); // fan MEDIUM
        expected.extend_from_slice(&0.0f32.to_le_bytes());

        assert_eq!(record.as_slice(), expected.as_slice());
    }

    #[test]
    fn decode_round_trips() {
        let mut state = sample_state();
        state.simulate_temperature(512).unwrap();

        let decoded = decode(&encode(&state)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn decode_treats_nonzero_words_as_on() {
        let mut record = encode(&HomeState::new());
        record[..FIELD_LEN].copy_from_slice(&0xFFFF_FFFF_u32.to_le_bytes());
        record[FIELD_LEN..2 * FIELD_LEN].copy_from_slice(&2u32.to_le_bytes());

        let decoded = decode(&record).unwrap();
        assert!(decoded.light(Light::Room));
        assert!(decoded.light(Light::Kitchen));
        assert!(!decoded.light(Light::Hall));
    }

    #[test]
    fn decode_rejects_out_of_range_fan_speed() {
        let mut record = encode(&HomeState::new());
        record[3 * FIELD_LEN..4 * FIELD_LEN].copy_from_slice(&9u32.to_le_bytes());

        let err = decode(&record).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidField {
                field: "fan speed",
                value: 9,
            }
        ));
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HomeSim` Lib - A Rust library simulating a small smart-home control panel.
//!
//! This library models the controls of a tiny house in software: three
//! light switches, a four-step fan, a passcode-protected door lock, a
//! simulated LM35-style temperature sensor behind a 10-bit ADC, and
//! EEPROM-style persistence of the whole control state to a fixed-layout
//! binary file. Everything is synchronous and single-process; the library
//! is the engine, and a console front-end (see `demos/control_panel.rs`)
//! supplies the menus.
//!
//! # Supported Features
//!
//! - **Light control**: Toggle the room, kitchen, and hall lights
//! - **Fan control**: Four discrete speeds with a fail-safe reset to OFF
//! - **Door lock**: Fixed passcode, three attempts per approach
//! - **Temperature simulation**: 10-bit ADC sample to °C conversion
//! - **Persistence**: Save/load the control state as a 20-byte record
//!
//! # Quick Start
//!
//! ```
//! use homesim_lib::{FanSpeed, HomeState, Light};
//!
//! let mut state = HomeState::new();
//!
//! // Lights toggle in place and report their new value
//! assert!(state.toggle_light(Light::Room));
//!
//! // Fan requests are validated; good ones stick
//! let speed = state.set_fan_speed(2).unwrap();
//! assert_eq!(speed, FanSpeed::Medium);
//!
//! // ADC samples become temperatures
//! let celsius = state.simulate_temperature(512).unwrap();
//! assert!((celsius - 250.24).abs() < 0.01);
//! ```
//!
//! ## Persisting the state
//!
//! ```no_run
//! use homesim_lib::{EepromStore, HomeState, Light};
//!
//! # fn main() -> homesim_lib::Result<()> {
//! let store = EepromStore::new("eeprom.bin");
//!
//! let mut state = HomeState::new();
//! state.toggle_light(Light::Hall);
//! store.save(&state)?;
//!
//! // Later, or in another process
//! let restored = store.load()?;
//! assert_eq!(restored, state);
//! # Ok(())
//! # }
//! ```
//!
//! ## Unlocking the door
//!
//! ```
//! use homesim_lib::access::attempt_unlock;
//!
//! // The source is polled once per attempt, at most three times
//! assert!(attempt_unlock(|| "1234".to_string()).is_ok());
//! assert!(attempt_unlock(|| "0000".to_string()).is_err());
//! ```

pub mod access;
pub mod error;
pub mod state;
pub mod store;
pub mod types;

pub use access::{DoorLock, UnlockAttempt, attempt_unlock};
pub use error::{AccessError, Error, Result, StoreError, ValueError};
pub use state::HomeState;
pub use store::EepromStore;
pub use types::{AdcReading, FanSpeed, Light};

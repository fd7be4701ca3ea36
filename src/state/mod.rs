// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House state management.
//!
//! This module provides [`HomeState`], the single record of everything the
//! control panel can change: the three lights, the fan, and the most recent
//! simulated temperature reading.
//!
//! # Examples
//!
//! ```
//! use homesim_lib::state::HomeState;
//! use homesim_lib::types::Light;
//!
//! let mut state = HomeState::new();
//!
//! state.toggle_light(Light::Room);
//! assert!(state.light(Light::Room));
//! assert!(state.any_light_on());
//! ```

mod home_state;

pub use home_state::HomeState;

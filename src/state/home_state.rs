// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House state tracking.

use crate::error::ValueError;
use crate::types::{AdcReading, FanSpeed, Light};

/// The complete state of the simulated house.
///
/// This struct holds the three light switches, the fan setting, and the
/// most recent temperature reading. A fresh state starts with everything
/// off and the temperature at zero; from there it is only mutated through
/// the validated operations below, so a `HomeState` never holds an
/// out-of-range value.
///
/// The state is an ordinary owned value: callers keep one instance for the
/// session, pass it `&mut` into operations, and replace it wholesale after
/// a successful load from the settings store.
///
/// # Examples
///
/// ```
/// use homesim_lib::state::HomeState;
/// use homesim_lib::types::{FanSpeed, Light};
///
/// let mut state = HomeState::new();
/// state.toggle_light(Light::Kitchen);
/// assert!(state.light(Light::Kitchen));
///
/// let speed = state.set_fan_speed(3).unwrap();
/// assert_eq!(speed, FanSpeed::High);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HomeState {
    /// Room light switch.
    room_light: bool,
    /// Kitchen light switch.
    kitchen_light: bool,
    /// Hall light switch.
    hall_light: bool,
    /// Current fan setting.
    fan_speed: FanSpeed,
    /// Most recent simulated temperature in °C.
    last_temperature: f32,
}

impl HomeState {
    /// Creates a new state with everything off and the temperature at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Lights ==========

    /// Returns whether the given light is on.
    #[must_use]
    pub fn light(&self, light: Light) -> bool {
        match light {
            Light::Room => self.room_light,
            Light::Kitchen => self.kitchen_light,
            Light::Hall => self.hall_light,
        }
    }

    /// Sets the given light to an explicit on/off value.
    pub fn set_light(&mut self, light: Light, on: bool) {
        match light {
            Light::Room => self.room_light = on,
            Light::Kitchen => self.kitchen_light = on,
            Light::Hall => self.hall_light = on,
        }
    }

    /// Flips the given light and returns its new value.
    ///
    /// Toggling twice always restores the original value; no other field
    /// is affected.
    pub fn toggle_light(&mut self, light: Light) -> bool {
        let on = !self.light(light);
        self.set_light(light, on);
        on
    }

    /// Returns `true` if any light is on.
    #[must_use]
    pub fn any_light_on(&self) -> bool {
        Light::ALL.iter().any(|light| self.light(*light))
    }

    // ========== Fan ==========

    /// Returns the current fan setting.
    #[must_use]
    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    /// Applies a raw fan speed request from the panel.
    ///
    /// Requests in [0, 3] are stored as the matching [`FanSpeed`] variant.
    /// Anything else **resets the fan to `OFF`** and reports the error;
    /// the previous setting is not retained. A fan commanded with garbage
    /// must end up stopped, not spinning at its old speed.
    ///
    /// Returns the resulting fan speed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFanSpeed` if `requested` is outside
    /// [0, 3]. The fan is `OFF` once this returns.
    pub fn set_fan_speed(&mut self, requested: i32) -> Result<FanSpeed, ValueError> {
        match FanSpeed::new(requested) {
            Ok(speed) => {
                self.fan_speed = speed;
                Ok(speed)
            }
            Err(err) => {
                tracing::warn!(requested, "fan speed out of range, resetting to OFF");
                self.fan_speed = FanSpeed::Off;
                Err(err)
            }
        }
    }

    // ========== Temperature ==========

    /// Returns the most recent simulated temperature in °C.
    #[must_use]
    pub fn last_temperature(&self) -> f32 {
        self.last_temperature
    }

    /// Feeds a raw ADC sample through the sensor model.
    ///
    /// On success the converted temperature replaces the stored reading and
    /// is returned. An out-of-range sample leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `adc_value` is outside [0, 1023].
    pub fn simulate_temperature(&mut self, adc_value: i32) -> Result<f32, ValueError> {
        let reading = AdcReading::new(adc_value)?;
        let celsius = reading.to_celsius();
        tracing::debug!(adc = reading.value(), celsius, "temperature sample recorded");
        self.last_temperature = celsius;
        Ok(celsius)
    }

    // ========== Lifecycle ==========

    /// Resets everything to the power-on state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Reassembles a state from already-validated persisted fields.
    pub(crate) fn from_stored(
        room_light: bool,
        kitchen_light: bool,
        hall_light: bool,
        fan_speed: FanSpeed,
        last_temperature: f32,
    ) -> Self {
        Self {
            room_light,
            kitchen_light,
            hall_light,
            fan_speed,
            last_temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_all_off() {
        let state = HomeState::new();
        for light in Light::ALL {
            assert!(!state.light(light));
        }
        assert_eq!(state.fan_speed(), FanSpeed::Off);
        assert!((state.last_temperature() - 0.0).abs() < f32::EPSILON);
        assert!(!state.any_light_on());
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut state = HomeState::new();
        assert!(state.toggle_light(Light::Room));
        assert!(state.light(Light::Room));
        assert!(!state.toggle_light(Light::Room));
        assert!(!state.light(Light::Room));
    }

    #[test]
    fn toggle_twice_restores_original() {
        let mut state = HomeState::new();
        state.set_light(Light::Hall, true);

        for light in Light::ALL {
            let before = state.light(light);
            state.toggle_light(light);
            state.toggle_light(light);
            assert_eq!(state.light(light), before);
        }
    }

    #[test]
    fn lights_are_independent() {
        let mut state = HomeState::new();
        state.toggle_light(Light::Kitchen);

        assert!(!state.light(Light::Room));
        assert!(state.light(Light::Kitchen));
        assert!(!state.light(Light::Hall));
        assert!(state.any_light_on());
    }

    #[test]
    fn fan_speed_valid_requests() {
        let mut state = HomeState::new();
        for requested in 0..=3 {
            let speed = state.set_fan_speed(requested).unwrap();
            assert_eq!(i32::from(speed.as_num()), requested);
            assert_eq!(state.fan_speed(), speed);
        }
    }

    #[test]
    fn fan_speed_invalid_request_resets_to_off() {
        let mut state = HomeState::new();
        state.set_fan_speed(3).unwrap();

        // The previous setting must not survive a bad request
        let result = state.set_fan_speed(4);
        assert_eq!(result, Err(ValueError::InvalidFanSpeed(4)));
        assert_eq!(state.fan_speed(), FanSpeed::Off);

        state.set_fan_speed(2).unwrap();
        assert!(state.set_fan_speed(-1).is_err());
        assert_eq!(state.fan_speed(), FanSpeed::Off);
    }

    #[test]
    fn fan_speed_invalid_request_leaves_rest_untouched() {
        let mut state = HomeState::new();
        state.toggle_light(Light::Room);
        state.simulate_temperature(100).unwrap();

        let _ = state.set_fan_speed(99);

        assert!(state.light(Light::Room));
        let expected = AdcReading::new(100).unwrap().to_celsius();
        assert!((state.last_temperature() - expected).abs() <= 0.001);
    }

    #[test]
    fn temperature_valid_sample() {
        let mut state = HomeState::new();
        let celsius = state.simulate_temperature(512).unwrap();
        assert!((celsius - 250.2443).abs() <= 0.001);
        assert!((state.last_temperature() - celsius).abs() < f32::EPSILON);
    }

    #[test]
    fn temperature_invalid_sample_leaves_state_unchanged() {
        let mut state = HomeState::new();
        state.simulate_temperature(512).unwrap();
        let before = state.last_temperature();

        for sample in [-1, 1024, 9999] {
            let result = state.simulate_temperature(sample);
            assert!(matches!(result, Err(ValueError::OutOfRange { .. })));
            assert!((state.last_temperature() - before).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = HomeState::new();
        state.toggle_light(Light::Room);
        state.set_fan_speed(2).unwrap();
        state.simulate_temperature(800).unwrap();

        state.clear();

        assert_eq!(state, HomeState::new());
    }
}

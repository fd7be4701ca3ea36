// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console control panel for the home simulation.
//!
//! Presents the classic numbered menu on stdin/stdout and drives the
//! library underneath. Run with `--test` (or `-t`) for a non-interactive
//! smoke check; an optional trailing argument overrides the EEPROM file
//! path (default `eeprom.bin`).
//!
//! ```text
//! cargo run --example control_panel
//! cargo run --example control_panel -- --test
//! ```

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use homesim_lib::{DoorLock, EepromStore, FanSpeed, HomeState, Light, UnlockAttempt};

const DEFAULT_EEPROM_PATH: &str = "eeprom.bin";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut eeprom_path = DEFAULT_EEPROM_PATH.to_string();
    let mut test_mode = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--test" | "-t" => test_mode = true,
            other => eeprom_path = other.to_string(),
        }
    }

    let store = EepromStore::new(&eeprom_path);
    if test_mode {
        return run_self_test(&store);
    }

    let mut state = HomeState::new();
    loop {
        show_main_menu();
        let Some(line) = read_line() else {
            // stdin is gone, leave quietly
            println!("\nExiting Smart Home System...");
            return ExitCode::SUCCESS;
        };
        let Ok(choice) = line.parse::<i32>() else {
            println!("Invalid input.");
            continue;
        };

        match choice {
            1 => toggle_lights(&mut state),
            2 => fan_control(&mut state),
            3 => door_lock(),
            4 => simulate_temperature(&mut state),
            5 => save_settings(&store, &state),
            6 => load_settings(&store, &mut state),
            7 => show_status(&state),
            0 => {
                println!("Exiting Smart Home System...");
                return ExitCode::SUCCESS;
            }
            _ => println!("Invalid choice."),
        }

        thread::sleep(Duration::from_secs(1));
    }
}

fn show_main_menu() {
    println!("\n===== Smart Home Control Panel =====");
    println!("1. Toggle Lights");
    println!("2. Fan Speed Control");
    println!("3. Door Lock (Password Protected)");
    println!("4. Simulate Temperature Sensor");
    println!("5. Save Settings (EEPROM)");
    println!("6. Load Settings (EEPROM)");
    println!("7. Show Status (JSON)");
    println!("0. Exit");
    print!("Enter your choice: ");
    flush_stdout();
}

fn toggle_lights(state: &mut HomeState) {
    println!("\n--- Toggle Lights ---");
    for light in Light::ALL {
        println!("{}. {} ({})", light.selector(), light, on_off(state.light(light)));
    }
    let Some(selection) = prompt_integer("Enter Light Number to Toggle: ") else {
        println!("Invalid input.");
        return;
    };

    match Light::try_from(selection) {
        Ok(light) => {
            let on = state.toggle_light(light);
            println!("{light} is now {}.", on_off(on));
        }
        Err(_) => println!("Invalid choice."),
    }
}

fn fan_control(state: &mut HomeState) {
    println!("\n--- Fan Speed Control ---");
    for speed in [FanSpeed::Off, FanSpeed::Low, FanSpeed::Medium, FanSpeed::High] {
        println!("{}. {speed}", speed.as_num());
    }
    let Some(requested) = prompt_integer("Enter Fan Speed: ") else {
        println!("Invalid input.");
        return;
    };

    match state.set_fan_speed(requested) {
        Ok(speed) => println!("Fan speed set to {speed}."),
        Err(_) => println!("Invalid fan speed. Reset to OFF."),
    }
}

fn door_lock() {
    let mut lock = DoorLock::new();
    loop {
        let candidate = prompt_password();
        match lock.try_passcode(&candidate) {
            UnlockAttempt::Granted => {
                println!("Access Granted. Door Unlocked!");
                return;
            }
            UnlockAttempt::Retry { remaining } => {
                println!("Wrong Password. Attempts left: {remaining}");
            }
            UnlockAttempt::Denied => {
                println!("Wrong Password. Attempts left: 0");
                println!("Access Denied. Door remains locked.");
                return;
            }
        }
    }
}

fn simulate_temperature(state: &mut HomeState) {
    let Some(adc_value) = prompt_integer("Enter simulated ADC value (0-1023): ") else {
        println!("Invalid input.");
        return;
    };

    match state.simulate_temperature(adc_value) {
        Ok(celsius) => println!("Temperature: {celsius:.2} \u{b0}C"),
        Err(_) => println!("Invalid ADC value."),
    }
}

fn save_settings(store: &EepromStore, state: &HomeState) {
    match store.save(state) {
        Ok(()) => println!("Settings saved to EEPROM."),
        Err(err) => println!("Failed to save settings: {err}"),
    }
}

fn load_settings(store: &EepromStore, state: &mut HomeState) {
    match store.load() {
        Ok(loaded) => {
            *state = loaded;
            println!("Settings loaded from EEPROM.");
        }
        // The current state stays in effect when the record is unusable
        Err(err) => println!("Failed to load settings: {err}"),
    }
}

fn show_status(state: &HomeState) {
    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Failed to render status: {err}"),
    }
}

/// Non-interactive smoke check: save a known state, clear, reload, compare,
/// then spot-check the ADC conversion. Exits nonzero on the first failure.
fn run_self_test(store: &EepromStore) -> ExitCode {
    let mut state = HomeState::new();
    state.set_light(Light::Room, true);
    state.set_light(Light::Hall, true);
    if state.set_fan_speed(2).is_err() {
        return ExitCode::from(2);
    }
    let saved = state.clone();

    if let Err(err) = store.save(&state) {
        eprintln!("Self-test save failed: {err}");
        return ExitCode::from(3);
    }

    state.clear();
    match store.load() {
        Ok(loaded) => state = loaded,
        Err(err) => {
            eprintln!("Self-test load failed: {err}");
            return ExitCode::from(4);
        }
    }
    if state != saved {
        eprintln!("Self-test state mismatch after reload");
        return ExitCode::from(5);
    }

    let mut scratch = HomeState::new();
    match scratch.simulate_temperature(512) {
        Ok(celsius) if (celsius - 250.2443).abs() <= 0.001 => {}
        _ => {
            eprintln!("Self-test ADC conversion mismatch");
            return ExitCode::from(6);
        }
    }

    println!("Self-test passed.");
    ExitCode::SUCCESS
}

// ---- prompt helpers ----

fn prompt_integer(label: &str) -> Option<i32> {
    print!("{label}");
    flush_stdout();
    read_line()?.parse().ok()
}

fn prompt_password() -> String {
    print!("Enter password: ");
    flush_stdout();
    read_line().unwrap_or_default()
}

/// Reads one trimmed line from stdin; `None` once stdin is closed.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn flush_stdout() {
    // Prompts have no trailing newline, so push them out explicitly
    let _ = io::stdout().flush();
}

const fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

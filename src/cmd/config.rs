// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use crate::config::Settings;

/// Display the effective settings and where they came from.
pub fn run_options_command(settings: &Settings, loaded_files: &[String]) {
    for line in settings.format_options() {
        println!("{line}");
    }
    if loaded_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in loaded_files {
            println!("{line}");
        }
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use campusnav::events::Event;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|entry: &str| {
    if let Ok(event) = Event::parse(entry) {
        let again = Event::parse(&event.encode()).expect("encoded events parse");
        assert_eq!(again, event);
    }
});

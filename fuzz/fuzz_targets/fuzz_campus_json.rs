// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use campusnav::graph::{CampusGraph, CampusStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(store) = serde_json::from_slice::<CampusStore>(data) else {
        return;
    };
    let Ok(campus) = CampusGraph::from_store(&store) else {
        return;
    };
    let names = campus.locations();
    if let (Some(first), Some(last)) = (names.first(), names.last()) {
        let route = campus.shortest_path(first, last);
        assert!(route.distance >= 0.0);
        if route.is_found() {
            assert_eq!(route.path.first().map(String::as_str), Some(*first));
            assert_eq!(route.path.last().map(String::as_str), Some(*last));
        }
    }
});

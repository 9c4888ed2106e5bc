// SPDX-License-Identifier: PMPL-1.0-or-later
// Fuzz target for snapshot parsing and report rendering

#![no_main]

use libfuzzer_sys::fuzz_target;

use dbinspect_report::Inspector;
use dbinspect_storage::DatabaseSnapshot;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed snapshots must be rejected, never panic.
        if let Ok(snapshot) = DatabaseSnapshot::from_json(s) {
            // Unknown structures and missing key domains are errors, not panics.
            if let Ok(text) = Inspector::default().render(&snapshot) {
                assert!(text.starts_with("Database\n"));
                assert!(text.ends_with('\n'));
            }
        }
    }
});

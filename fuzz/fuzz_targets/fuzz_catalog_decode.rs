//! Fuzz target for catalog JSON decoding.
//!
//! Decoding arbitrary bytes must never panic: it either yields a catalog or
//! a parse error, and a decoded catalog must answer lookups safely.

#![no_main]

use libfuzzer_sys::fuzz_target;
use portico::Catalog;

fuzz_target!(|data: &str| {
    if let Ok(catalog) = Catalog::from_json_str(data) {
        // Lookups on whatever decoded must be total.
        let _ = catalog.sections("SEN");
        let _ = catalog.section("SEN", "Aide");
        let _ = catalog.is_empty();
        for key in catalog.portal_keys() {
            let _ = catalog.sections(key);
        }
    }
});

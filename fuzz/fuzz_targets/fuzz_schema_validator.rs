//! Fuzz target for structural validation and document loading.
//!
//! Goal: validation and loading should **never panic** on any input.
//! Bad documents become findings or `ModelError`s.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_schema_validator
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let result = formguard_schema::validate(text);
    assert_eq!(result.is_valid, result.errors.is_empty());

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        let _ = formguard_domain::validate_json_schema(&value);
        let _ = formguard_schema::count_fields(&value);
    }

    if let Ok(form) = formguard_domain::FormDefinition::from_json_str(text) {
        let engine = formguard_domain::ValidationEngine::with_form(&form);
        let _ = engine.validate_form();
        let _ = engine.enabled_fields();
    }
});

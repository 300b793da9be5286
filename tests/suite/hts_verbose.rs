//! Native verbosity bindings

use strand_bindings::HtsLogLevel;
use strand_bindings::hts_verbose;

use crate::common::assert_raises_regex;

// Verbosity is process-global; keep all mutation in one test.
#[test]
fn set_and_get_round_trip() {
    hts_verbose::set(HtsLogLevel::Error);
    assert_eq!(hts_verbose::get(), HtsLogLevel::Error);

    assert_eq!(
        hts_verbose::set_by_name("HTS_LOG_DEBUG").unwrap(),
        HtsLogLevel::Debug
    );
    assert_eq!(hts_verbose::get(), HtsLogLevel::Debug);

    hts_verbose::set_raw(0).unwrap();
    assert_eq!(hts_verbose::get(), HtsLogLevel::Off);

    assert_raises_regex(hts_verbose::set_raw(2), r"^hts_verbose\.set: INVALID_ARGUMENT");
    assert_raises_regex(
        hts_verbose::set_by_name("screaming"),
        r"hts_verbose\.set: .*screaming",
    );
    assert_eq!(hts_verbose::get(), HtsLogLevel::Off);

    hts_verbose::set(HtsLogLevel::default());
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfpair::utils::{
    ELLIPSIS, basename, strip_drop_artifacts, suggested_output_name, truncate_chars,
    truncate_with_ellipsis,
};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    let cleaned = strip_drop_artifacts(&raw);
    assert!(cleaned.len() <= raw.len());

    let name = basename(Path::new(cleaned.as_ref()));

    let shown = truncate_with_ellipsis(&name, 35);
    assert!(shown.chars().count() <= 35 + ELLIPSIS.chars().count());

    assert!(truncate_chars(&raw, 40).chars().count() <= 40);

    assert!(suggested_output_name(&name).ends_with("_merged.pdf"));
});

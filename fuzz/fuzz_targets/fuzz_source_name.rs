#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sasswatch::SourceFileName;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(name) = SourceFileName::from_relative_path(Path::new(s)) {
            assert!(!name.as_str().is_empty());
            assert!(!name.as_str().starts_with('/'));
        }
        let _ = SourceFileName::new(s).to_path(Path::new("/styles"));
    }
});

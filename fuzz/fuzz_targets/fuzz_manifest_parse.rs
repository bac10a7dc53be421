#![no_main]

use libfuzzer_sys::fuzz_target;
use sasswatch::domain::entities::MANIFEST_BANNER;
use sasswatch::{Manifest, SourceSet};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let imports = Manifest::parse_imports(text);

        // Whatever parsed must render again
        let set: SourceSet = imports.into_iter().collect();
        let rendered = Manifest::generate("fuzz", &set).render();
        assert!(rendered.starts_with(MANIFEST_BANNER));
    }
});

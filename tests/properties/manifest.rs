//! Property tests for manifest rendering.

use chrono::{FixedOffset, TimeZone};
use proptest::prelude::*;

use sasswatch::domain::entities::MANIFEST_BANNER;
use sasswatch::{Manifest, SourceFileName, SourceSet};

fn source_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([a-z_][a-z0-9_-]{0,8}/){0,2}_?[a-z][a-z0-9_-]{0,10}\\.scss")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendered imports parse back to the sorted, deduplicated set.
    #[test]
    fn property_render_parse_round_trip(
        names in proptest::collection::vec(source_name(), 0..20),
        offset_hours in -11i32..=12,
    ) {
        let set: SourceSet = names.iter().map(|n| SourceFileName::new(n.as_str())).collect();
        let time = FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .unwrap();

        let text = Manifest::with_timestamp("styles", &set, time).render();

        prop_assert!(text.starts_with(MANIFEST_BANNER));
        prop_assert!(text.ends_with('\n'));

        let parsed: Vec<String> = Manifest::parse_imports(&text)
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();
        prop_assert_eq!(parsed, set.to_strings());
    }

    /// PROPERTY: Two snapshots of the same set render identically at the
    /// same timestamp.
    #[test]
    fn property_render_is_deterministic(names in proptest::collection::vec(source_name(), 0..12)) {
        let forward: SourceSet = names.iter().map(|n| SourceFileName::new(n.as_str())).collect();
        let backward: SourceSet = names
            .iter()
            .rev()
            .map(|n| SourceFileName::new(n.as_str()))
            .collect();
        let time = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

        prop_assert_eq!(
            Manifest::with_timestamp("s", &forward, time).render(),
            Manifest::with_timestamp("s", &backward, time).render()
        );
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_imports_never_panics(text in "\\PC{0,200}") {
        let _ = Manifest::parse_imports(&text);
    }
}

//! Scenario: files come and go while the watch runs.

use sasswatch::domain::services::NotificationKind;
use sasswatch::{PendingWork, WatchEvent};

use crate::common::{import_lines, TestEnv};
use crate::support::Harness;

#[test]
fn initial_build_lists_every_source_in_order() {
    let env = TestEnv::new();
    env.write_source("b.scss", "b { color: green; }\n");
    env.write_source("a.scss", "a { color: red; }\n");
    env.write_source("components/_button.scss", ".btn { color: blue; }\n");
    env.write_source("notes.txt", "not a stylesheet");

    let harness = Harness::start(env);

    assert_eq!(
        import_lines(&harness.env.manifest_text()),
        [
            "@import \"a.scss\";",
            "@import \"b.scss\";",
            "@import \"components/_button.scss\";",
        ]
    );
    let css = harness.env.css_text();
    assert!(css.contains("a{color:red}"), "css: {}", css);
    assert!(css.contains(".btn{color:blue}"), "css: {}", css);

    let events = harness.events();
    assert!(matches!(
        events[0],
        WatchEvent::WatchStarted { ref tracked, .. } if tracked.len() == 3
    ));
    assert!(matches!(
        harness.last_event(),
        Some(WatchEvent::RebuildComplete { imports: 3, .. })
    ));
}

#[test]
fn adding_and_removing_files_regenerates_manifest() {
    let env = TestEnv::new();
    env.write_source("a.scss", "a { color: red; }\n");
    env.write_source("b.scss", "b { color: green; }\n");
    let harness = Harness::start(env);

    let work = harness.create("c.scss", "c { color: blue; }\n");
    assert_eq!(work, Some(PendingWork::RegenerateManifestAndCompile));
    assert_eq!(import_lines(&harness.env.manifest_text()).len(), 3);
    assert!(harness.env.css_text().contains("c{color:blue}"));

    let work = harness.delete("b.scss");
    assert_eq!(work, Some(PendingWork::RegenerateManifestAndCompile));
    assert_eq!(
        import_lines(&harness.env.manifest_text()),
        ["@import \"a.scss\";", "@import \"c.scss\";"]
    );
    assert!(!harness.env.css_text().contains("green"));
    assert_eq!(harness.session.sources().to_strings(), ["a.scss", "c.scss"]);
}

#[test]
fn rename_shows_up_as_remove_then_add() {
    let env = TestEnv::new();
    env.write_source("old.scss", "x { color: red; }\n");
    let harness = Harness::start(env);

    let old = harness.env.styles().join("old.scss");
    let new = harness.env.styles().join("new.scss");
    std::fs::rename(&old, &new).unwrap();

    harness.notify(&old, NotificationKind::Rename);
    harness.notify(&new, NotificationKind::Rename);

    assert_eq!(
        import_lines(&harness.env.manifest_text()),
        ["@import \"new.scss\";"]
    );
}

#[test]
fn manifest_and_foreign_files_are_ignored() {
    let env = TestEnv::new();
    env.write_source("a.scss", "a { color: red; }\n");
    let harness = Harness::start(env);
    let before = harness.events().len();

    let manifest = harness.env.manifest();
    assert_eq!(harness.notify(&manifest, NotificationKind::Modify), None);

    let notes = harness.env.write_source("notes.md", "# hi");
    assert_eq!(harness.notify(&notes, NotificationKind::Create), None);

    let outside = harness.env.root().join("elsewhere.scss");
    std::fs::write(&outside, "e {}").unwrap();
    assert_eq!(harness.notify(&outside, NotificationKind::Create), None);

    assert_eq!(harness.events().len(), before);
    assert_eq!(harness.session.sources().to_strings(), ["a.scss"]);
}

#[test]
fn empty_directory_produces_header_only_manifest() {
    let harness = Harness::start(TestEnv::new());

    let manifest = harness.env.manifest_text();
    assert!(import_lines(&manifest).is_empty());
    assert_eq!(manifest.lines().count(), 3);
    assert_eq!(harness.env.css_text(), "");
}

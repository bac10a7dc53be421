//! Scenario: editing an existing file only refreshes the compiled output.

use sasswatch::domain::services::{NotificationKind, RawNotification};
use sasswatch::{PendingWork, WatchEvent};

use crate::common::TestEnv;
use crate::support::Harness;

#[test]
fn content_edit_keeps_manifest_text_and_recompiles() {
    let env = TestEnv::new();
    env.write_source("a.scss", "a { color: red; }\n");
    let harness = Harness::start(env);
    let manifest_before = harness.env.manifest_text();

    let work = harness.edit("a.scss", "a { color: purple; }\n");

    assert_eq!(work, Some(PendingWork::TouchAndCompile));
    assert_eq!(harness.env.manifest_text(), manifest_before);
    assert!(harness.env.css_text().contains("a{color:purple}"));
}

#[test]
fn partial_edit_is_picked_up_through_import() {
    let env = TestEnv::new();
    env.write_source("_vars.scss", "$brand: red;\n");
    env.write_source("z_site.scss", "body { color: $brand; }\n");
    let harness = Harness::start(env);
    assert!(harness.env.css_text().contains("body{color:red}"));

    harness.edit("_vars.scss", "$brand: blue;\n");

    assert!(harness.env.css_text().contains("body{color:blue}"));
}

#[test]
fn every_edit_gets_its_own_rebuild() {
    let env = TestEnv::new();
    env.write_source("a.scss", "a { color: red; }\n");
    let harness = Harness::start(env);
    let started_before = count_started(&harness.events());

    for color in ["red", "green", "blue"] {
        let path = harness
            .env
            .write_source("a.scss", &format!("a {{ color: {}; }}\n", color));
        harness
            .session
            .handle_notification(&RawNotification::new(path, NotificationKind::Modify));
    }
    harness.session.wait_idle();

    assert_eq!(count_started(&harness.events()) - started_before, 3);
    assert!(harness.env.css_text().contains("a{color:blue}"));
}

fn count_started(events: &[WatchEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, WatchEvent::RebuildStarted { .. }))
        .count()
}

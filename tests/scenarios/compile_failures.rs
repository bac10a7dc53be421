//! Scenario: a broken stylesheet never clobbers the last good output.

use sasswatch::{WatchEvent, WorkStage};

use crate::common::TestEnv;
use crate::support::Harness;

#[test]
fn syntax_error_keeps_previous_css_and_recovers() {
    let env = TestEnv::new();
    env.write_source("a.scss", "a { color: red; }\n");
    let harness = Harness::start(env);
    let good_css = harness.env.css_text();
    assert!(good_css.contains("a{color:red}"));

    harness.edit("a.scss", "a { color: red;\n");

    assert_eq!(harness.env.css_text(), good_css);
    match harness.last_event() {
        Some(WatchEvent::RebuildFailed { stage, message, .. }) => {
            assert_eq!(stage, WorkStage::Compiling);
            assert!(!message.is_empty());
        }
        other => panic!("expected rebuild_failed, got {:?}", other),
    }

    harness.edit("a.scss", "a { color: teal; }\n");

    assert!(harness.env.css_text().contains("a{color:teal}"));
    assert!(matches!(
        harness.last_event(),
        Some(WatchEvent::RebuildComplete { .. })
    ));
}

#[test]
fn failure_does_not_block_later_membership_changes() {
    let env = TestEnv::new();
    env.write_source("broken.scss", "a { color: ;\n");
    let harness = Harness::start(env);
    assert!(harness.events().iter().any(WatchEvent::is_failure));

    harness.delete("broken.scss");
    harness.create("ok.scss", "ok { color: red; }\n");

    assert!(harness.env.css_text().contains("ok{color:red}"));
    assert!(!harness.env.manifest_text().contains("broken.scss"));
}

//! Property tests for the rebuild pipeline: FIFO order and one unit in flight.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use sasswatch::application::{ArtifactPaths, PipelineEvent, RebuildExecutor, RebuildPipeline};
use sasswatch::domain::entities::SharedSourceSet;
use sasswatch::domain::ports::{StyleCompiler, WorkQueue};
use sasswatch::infrastructure::LocalFs;
use sasswatch::{Manifest, PendingWork, SassWatchResult, SourceFileName, SourceSet};

/// Emits the manifest's imports as comments and tracks overlapping calls.
#[derive(Default)]
struct OverlapCompiler {
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl StyleCompiler for OverlapCompiler {
    fn compile(&self, entry: &Path, _include_paths: &[PathBuf]) -> SassWatchResult<String> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        let text = std::fs::read_to_string(entry)?;
        std::thread::yield_now();
        let css = Manifest::parse_imports(&text)
            .iter()
            .map(|name| format!("/* {} */\n", name))
            .collect();
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(css)
    }
}

fn work() -> impl Strategy<Value = PendingWork> {
    prop_oneof![
        Just(PendingWork::RegenerateManifestAndCompile),
        Just(PendingWork::TouchAndCompile),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Units finish in submission order, never overlap, and the
    /// last unit leaves the artifacts matching the final source set.
    #[test]
    fn property_units_run_in_order(
        units in proptest::collection::vec(work(), 1..12),
        final_count in 0usize..5,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let styles = dir.path().join("styles");
        std::fs::create_dir_all(&styles).unwrap();
        let paths = ArtifactPaths::new(&styles, styles.join("_all.scss"))
            .with_compiled(Some(dir.path().join("out.css")));

        let sources = SharedSourceSet::new(SourceSet::new());
        let compiler = Arc::new(OverlapCompiler::default());
        let executor =
            RebuildExecutor::new(paths, LocalFs::new(), compiler.clone(), sources.clone());

        let finished = Arc::new(Mutex::new(Vec::new()));
        let sink = finished.clone();
        let pipeline = RebuildPipeline::spawn(executor, move |event| {
            if let PipelineEvent::Finished(report) = event {
                sink.lock().unwrap().push(report);
            }
        })
        .unwrap();

        for unit in &units {
            pipeline.submit(*unit);
        }
        sources.update(|set| {
            for i in 0..final_count {
                set.insert(SourceFileName::new(format!("f{}.scss", i)));
            }
        });
        pipeline.submit(PendingWork::RegenerateManifestAndCompile);
        pipeline.shutdown();

        let reports = finished.lock().unwrap().clone();
        let mut expected = units.clone();
        expected.push(PendingWork::RegenerateManifestAndCompile);
        let order: Vec<PendingWork> = reports.iter().map(|r| r.work).collect();
        prop_assert_eq!(order, expected);
        prop_assert!(reports.iter().all(|r| r.is_success()));
        prop_assert_eq!(compiler.max_active.load(Ordering::SeqCst), 1);

        let css = std::fs::read_to_string(dir.path().join("out.css")).unwrap();
        prop_assert_eq!(css.lines().count(), final_count);
    }
}

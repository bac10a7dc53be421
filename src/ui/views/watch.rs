use crossterm::style::Stylize;

use crate::ui::primitives::icon::Icon;
use sasswatch::{PendingWork, WatchEvent, WorkStage};

pub fn render_watch_header(
    source: &str,
    manifest: &str,
    compiled: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if supports_color {
        "sasswatch".cyan().bold().to_string()
    } else {
        "sasswatch".to_string()
    };

    let mut out = format!(
        "{} {}\n",
        Icon::Watch.colored(supports_color, supports_unicode),
        title
    );
    out.push_str(&format!("Source: {}\n", source));
    out.push_str(&format!("Manifest: {}\n", manifest));
    out.push_str(&format!("CSS: {}\n", compiled.unwrap_or("(not compiled)")));
    out.push_str("Hint: Press Ctrl+C to stop\n");
    out
}

/// One line for a non-fatal configuration problem, printed before the header.
pub fn render_config_warning(
    message: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Warning: {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        message
    )
}

fn work_label(work: PendingWork) -> &'static str {
    match work {
        PendingWork::RegenerateManifestAndCompile => "Regenerating manifest",
        PendingWork::TouchAndCompile => "Recompiling",
    }
}

fn failure_label(stage: WorkStage) -> &'static str {
    match stage {
        WorkStage::Rendering => "Manifest write failed",
        WorkStage::Touching => "Manifest touch failed",
        WorkStage::Compiling => "Compile failed",
        WorkStage::Writing => "CSS write failed",
        _ => "Failed",
    }
}

fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted {
            source, tracked, ..
        } => format!(
            "{} {} Watching: {} ({} files)\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            source,
            tracked.len()
        ),
        WatchEvent::FileChanged { path, exists, work } => {
            let (icon, verb) = match (work, exists) {
                (PendingWork::RegenerateManifestAndCompile, true) => (Icon::Added, "Added"),
                (PendingWork::RegenerateManifestAndCompile, false) => (Icon::Removed, "Removed"),
                (PendingWork::TouchAndCompile, _) => (Icon::Arrow, "Changed"),
            };
            format!(
                "{} {} {}: {}\n",
                prefix,
                icon.colored(supports_color, supports_unicode),
                verb,
                path
            )
        }
        WatchEvent::RebuildStarted { work } => format!(
            "{} {} {}...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode),
            work_label(*work)
        ),
        WatchEvent::RebuildComplete {
            imports,
            compiled_bytes,
            ..
        } => {
            let detail = match compiled_bytes {
                Some(bytes) => format!("{} imports, {} written", imports, format_bytes(*bytes)),
                None => format!("{} imports", imports),
            };
            format!(
                "{} {} Done: {}\n",
                prefix,
                Icon::Success.colored(supports_color, supports_unicode),
                detail
            )
        }
        WatchEvent::RebuildFailed { stage, message, .. } => format!(
            "{} {} {}: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            failure_label(*stage),
            message
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use sasswatch::application::{preflight, EventSink, PreflightOutcome, WatchEvent, WatchOptions};
use sasswatch::config::Config;
use sasswatch::domain::ports::{AssumeYes, OverwriteConfirmer};
use sasswatch::domain::value_objects::CompileStyle;
use sasswatch::infrastructure::{InteractiveConfirmer, LocalFs, NotifySubscription};
use sasswatch::presentation::{create_watch_session, Cli};

use crate::ui::context::UiContext;
use crate::ui::views::watch::{
    render_config_warning, render_watch_event, render_watch_header,
};

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, warnings) = Config::load_layered(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.color, &config);

    for warning in &warnings {
        eprint!(
            "{}",
            render_config_warning(&warning.message(), ui.color, ui.unicode)
        );
    }

    let confirmer: Box<dyn OverwriteConfirmer> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(InteractiveConfirmer::new(ui.color))
    };
    let outcome = preflight(
        cli.watch_dir.as_deref(),
        cli.output.as_deref(),
        &LocalFs::new(),
        confirmer.as_ref(),
    )?;
    if outcome == PreflightOutcome::Declined {
        if !ui.json {
            println!("Keeping existing manifest; nothing to do.");
        }
        return Ok(());
    }

    // preflight has already rejected missing positionals
    let (Some(watch_dir), Some(manifest)) = (cli.watch_dir.clone(), cli.output.clone()) else {
        return Ok(());
    };

    let style = cli
        .style
        .map(CompileStyle::from)
        .unwrap_or(config.compile.style);
    let options = WatchOptions::new(watch_dir.clone(), manifest)
        .with_compiled(cli.css_output.clone())
        .with_load_paths(config.compile.load_paths.clone())
        .with_suffix(config.suffix())
        .with_json(ui.json);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &options.watch_dir.display().to_string(),
                &options.manifest.display().to_string(),
                options
                    .compiled
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .as_deref(),
                ui.color,
                ui.unicode,
            )
        );
    }

    let session = create_watch_session(options, style, event_printer(ui))?;
    let (subscription, notifications) = NotifySubscription::channel(&watch_dir)?;
    session.run(&notifications, &running);
    drop(subscription);

    Ok(())
}

fn event_printer(ui: UiContext) -> EventSink {
    Arc::new(move |event: WatchEvent| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        if event.is_failure() {
            eprint!("{rendered}");
        } else {
            print!("{rendered}");
        }
    })
}

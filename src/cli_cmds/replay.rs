use anyhow::{Context, Result};
use serde::Serialize;
use tessera::gallery::{Gallery, GalleryEvent};
use tessera::RecordingPresenter;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ReplayStep {
    event: String,
    changed: bool,
    commands: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FinalState {
    filter: String,
    viewer_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    src: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    gallery: String,
    steps: Vec<ReplayStep>,
    #[serde(rename = "final")]
    final_state: FinalState,
}

/// Drive `gallery` through `events` and collect what a presenter would see.
fn replay(mut gallery: Gallery, events: &[GalleryEvent], labels: &[String]) -> ReplayReport {
    let mut presenter = RecordingPresenter::default();
    let mut steps = Vec::with_capacity(events.len());

    for (event, label) in events.iter().zip(labels) {
        let changed = gallery.dispatch(event.clone(), &mut presenter);
        let commands = presenter.take().iter().map(ToString::to_string).collect();
        debug!(event = %label, changed, "replayed");
        steps.push(ReplayStep {
            event: label.clone(),
            changed,
            commands,
        });
    }

    let current = gallery.current_item();
    let final_state = FinalState {
        filter: gallery.active_filter().to_string(),
        viewer_open: gallery.viewer().is_open(),
        item: current.map(|item| item.id.0),
        src: current.map(|item| item.src.clone()),
    };

    ReplayReport {
        gallery: gallery.name().to_string(),
        steps,
        final_state,
    }
}

pub fn cmd_replay(gallery: Gallery, events: &[String], json: bool) -> Result<()> {
    let parsed = events
        .iter()
        .map(|raw| {
            raw.parse::<GalleryEvent>()
                .with_context(|| format!("invalid event '{}'", raw))
        })
        .collect::<Result<Vec<_>>>()?;
    let labels: Vec<String> = events.iter().map(|e| e.trim().to_string()).collect();

    let report = replay(gallery, &parsed, &labels);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for step in &report.steps {
        println!("> {}", step.event);
        if !step.changed {
            println!("  (no change)");
        }
        for command in &step.commands {
            println!("  {}", command);
        }
    }

    let state = &report.final_state;
    match (&state.item, &state.src) {
        (Some(item), Some(src)) if state.viewer_open => {
            println!("final: filter={} viewer=open item={} src={}", state.filter, item, src)
        }
        _ => println!("final: filter={} viewer=closed", state.filter),
    }
    Ok(())
}

use std::io::Write;

use owo_colors::OwoColorize;
use pmindex_core::DocumentEntry;
use pmindex_ingest::{IndexEvent, IndexSummary, display_name};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a real-time progress event.
pub fn print_event(w: &mut dyn Write, event: &IndexEvent, color: ColorMode) -> std::io::Result<()> {
    match event {
        IndexEvent::Missing { path, .. } => {
            let msg = format!("Warning: missing PDF {}, skipping…", path.display());
            if color.enabled() {
                writeln!(w, "{}", msg.yellow())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
        }
        IndexEvent::Indexing { path, standard } => {
            let name = display_name(path);
            if color.enabled() {
                writeln!(w, "Indexing {} as {}…", name.bold(), standard.cyan())?;
            } else {
                writeln!(w, "Indexing {} as {}…", name, standard)?;
            }
        }
        IndexEvent::Indexed { .. } => {}
    }
    Ok(())
}

/// Print the final summary line.
pub fn print_summary(
    w: &mut dyn Write,
    summary: &IndexSummary,
    color: ColorMode,
) -> std::io::Result<()> {
    let path = summary.output_path.display().to_string();
    if color.enabled() {
        writeln!(
            w,
            "Wrote {} with {} items",
            path.green(),
            summary.total_items.bold()
        )
    } else {
        writeln!(w, "Wrote {} with {} items", path, summary.total_items)
    }
}

/// Print the resolved registry with a presence marker per document.
pub fn print_status(
    w: &mut dyn Write,
    status: &[(&DocumentEntry, bool)],
    color: ColorMode,
) -> std::io::Result<()> {
    for (entry, present) in status {
        let marker = if *present { "ok" } else { "missing" };
        if color.enabled() {
            let marker = if *present {
                marker.green().to_string()
            } else {
                marker.red().to_string()
            };
            writeln!(
                w,
                "{:<12} {:<8} {}",
                entry.standard.bold(),
                marker,
                entry.path.display()
            )?;
        } else {
            writeln!(
                w,
                "{:<12} {:<8} {}",
                entry.standard,
                marker,
                entry.path.display()
            )?;
        }
    }
    Ok(())
}

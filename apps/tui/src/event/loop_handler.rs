use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

/// Print owner stats instead of opening the terminal UI
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = build_headless_stats(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\nProperty Map Stats");
    println!("==================");
    println!("Data file: {}", stats.data_file);
    println!("Total properties: {}", stats.total_records);
    println!("Mappable properties: {}", stats.mappable_records);

    println!("\nProperties by Owner:");
    for owner in &stats.owners {
        println!(
            "- {}: {} ({} mappable)",
            owner.owner, owner.records, owner.mappable
        );
    }

    Ok(())
}

pub fn build_headless_stats(app: &App) -> HeadlessStats {
    let records = app.controller.records();

    let owners = app
        .controller
        .owners()
        .labels()
        .iter()
        .map(|label| {
            let owned = records
                .iter()
                .filter(|record| record.owner_label() == *label);
            let (count, mappable) = owned.fold((0, 0), |(count, mappable), record| {
                (count + 1, mappable + usize::from(record.is_mappable()))
            });
            OwnerStats {
                owner: label.clone(),
                records: count,
                mappable,
            }
        })
        .collect();

    HeadlessStats {
        data_file: app.data_path.display().to_string(),
        total_records: records.len(),
        mappable_records: records.iter().filter(|record| record.is_mappable()).count(),
        owners,
    }
}

#[derive(Debug, Serialize)]
pub struct HeadlessStats {
    pub data_file: String,
    pub total_records: usize,
    pub mappable_records: usize,
    pub owners: Vec<OwnerStats>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OwnerStats {
    pub owner: String,
    pub records: usize,
    pub mappable: usize,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 100;

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key.code),
            // The next draw picks up the new size
            _ => {}
        }
    }

    Ok(())
}

use crate::error::LfResult;
use crate::selector::sweep::SweepEntry;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
struct ExportRow<'a> {
    draw_date: String,
    strategy: &'a str,
    run: usize,
    numbers: String,
    high: usize,
    low: usize,
    even: usize,
    odd: usize,
}

pub fn write_entries<W: Write>(
    writer: W,
    draw_date: NaiveDate,
    entries: &[SweepEntry],
) -> LfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let date = draw_date.format("%m-%d-%Y").to_string();

    for e in entries {
        wtr.serialize(ExportRow {
            draw_date: date.clone(),
            strategy: &e.label,
            run: e.run,
            numbers: e.ticket.joined("-"),
            high: e.high,
            low: e.low,
            even: e.even,
            odd: e.odd,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// `<dir>/<MM-DD-YYYY>_recommendations.csv`
pub fn export_path(dir: &Path, draw_date: NaiveDate) -> PathBuf {
    dir.join(format!(
        "{}_recommendations.csv",
        draw_date.format("%m-%d-%Y")
    ))
}

pub fn export_to_dir(dir: &Path, draw_date: NaiveDate, entries: &[SweepEntry]) -> LfResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = export_path(dir, draw_date);
    let file = File::create(&path)?;
    write_entries(file, draw_date, entries)?;
    info!("💾 Wrote {} tickets to {}", entries.len(), path.display());
    Ok(path)
}

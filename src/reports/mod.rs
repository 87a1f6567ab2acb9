use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use lottoforge::consts::{GRID_COLS, GRID_ROWS, POOL_MAX};
use lottoforge::draws::{grid_position, HistoricalDataset};
use lottoforge::scorer::ScoreDetails;
use lottoforge::selector::sweep::SweepEntry;
use lottoforge::error::LfResult;
use lottoforge::selector::Ticket;
use lottoforge::stats::FrequencyStatistics;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_dataset_summary(dataset: &HistoricalDataset, stats: &FrequencyStatistics) {
    println!("\n=== 🎱 DATASET: {} ===", dataset.label());
    println!("Cutoff:      {}", dataset.cutoff());
    println!("Draws:       {}", stats.total_draws());
    if let (Some(first), Some(last)) = (dataset.records().first(), dataset.records().last()) {
        println!("Range:       {} .. {}", first.date(), last.date());
    }
    println!("Average gap: {:.3}", stats.average_gap());
    println!("Max pair:    {}", stats.max_pair_frequency());
}

pub fn print_recent_draws(dataset: &HistoricalDataset, n: usize) {
    let mut table = new_table();
    table.set_header(vec!["Date", "Numbers", "Bonus"]);

    for record in dataset.records().iter().rev().take(n) {
        let numbers = record
            .sorted_numbers()
            .iter()
            .map(|b| format!("{:2}", b))
            .collect::<Vec<_>>()
            .join(" - ");
        let bonus = record
            .bonus()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![record.date().to_string(), numbers, bonus]);
    }
    println!("\nRecent draws\n{}", table);
}

pub fn print_frequency_table(stats: &FrequencyStatistics, top: usize) {
    let mut sorted: Vec<(u8, u32)> = stats.frequencies().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total = stats.total_draws().max(1) as f64;
    let mut table = new_table();
    table.set_header(vec!["Number", "Count", "% Draws"]);

    let hot = sorted.iter().take(top);
    let cold = sorted.iter().rev().take(top);

    for &(n, c) in hot {
        table.add_row(vec![
            Cell::new(n).add_attribute(Attribute::Bold),
            Cell::new(c).fg(Color::Red),
            Cell::new(format!("{:.1}", c as f64 / total * 100.0)),
        ]);
    }
    for &(n, c) in cold {
        table.add_row(vec![
            Cell::new(n).add_attribute(Attribute::Bold),
            Cell::new(c).fg(Color::Blue),
            Cell::new(format!("{:.1}", c as f64 / total * 100.0)),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("\nHot / cold numbers\n{}", table);
}

pub fn print_pair_table(stats: &FrequencyStatistics, top: usize) {
    let mut table = new_table();
    table.set_header(vec!["Pair", "Together"]);
    for ((a, b), c) in stats.top_pairs(top) {
        table.add_row(vec![Cell::new(format!("{:2} + {:2}", a, b)), Cell::new(c)]);
    }
    align_right(&mut table, 1..=1);
    println!("\nMost frequent pairs\n{}", table);
}

/// Text rendition of the frequency heatmap on the 10x5 number grid.
pub fn print_heatmap(stats: &FrequencyStatistics) {
    let max = stats.frequencies().map(|(_, c)| c).max().unwrap_or(0).max(1) as f64;

    let mut grid: Vec<Vec<Cell>> = (0..GRID_ROWS)
        .map(|_| (0..GRID_COLS).map(|_| Cell::new(" ")).collect())
        .collect();

    for n in 1..=POOL_MAX {
        let Some((row, col)) = grid_position(n) else {
            continue;
        };
        let count = stats.number_frequency(n);
        let intensity = count as f64 / max;
        let color = if intensity >= 0.85 {
            Color::Red
        } else if intensity >= 0.6 {
            Color::Yellow
        } else {
            Color::White
        };
        grid[row - 1][col - 1] = Cell::new(format!("{:2}\n({})", n, count))
            .fg(color)
            .set_alignment(CellAlignment::Center);
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for row in grid {
        table.add_row(row);
    }
    println!("\nFrequency heatmap\n{}", table);
}

pub fn print_tickets(title: &str, entries: &[SweepEntry]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Strategy").add_attribute(Attribute::Bold),
        Cell::new("Run"),
        Cell::new("Numbers").fg(Color::Cyan),
        Cell::new("High/Low"),
        Cell::new("Even/Odd"),
    ]);

    for e in entries {
        table.add_row(vec![
            Cell::new(&e.label).add_attribute(Attribute::Bold),
            Cell::new(e.run),
            Cell::new(e.ticket.to_string()).fg(Color::Cyan),
            Cell::new(format!("{}/{}", e.high, e.low)),
            Cell::new(format!("{}/{}", e.even, e.odd)),
        ]);
    }
    println!("\n=== 🏆 {} ===\n{}", title, table);
}

/// Mean high and even counts per strategy, in first-seen order.
pub fn print_sweep_summary(entries: &[SweepEntry]) {
    let mut groups: Vec<(&str, usize, usize, usize)> = Vec::new();
    for e in entries {
        match groups.iter_mut().find(|g| g.0 == e.label) {
            Some(g) => {
                g.1 += 1;
                g.2 += e.high;
                g.3 += e.even;
            }
            None => groups.push((e.label.as_str(), 1, e.high, e.even)),
        }
    }

    let mut table = new_table();
    table.set_header(vec!["Strategy", "Tickets", "Mean High", "Mean Even"]);
    for (label, n, high, even) in groups {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(n),
            Cell::new(format!("{:.2}", high as f64 / n as f64)),
            Cell::new(format!("{:.2}", even as f64 / n as f64)),
        ]);
    }
    align_right(&mut table, 1..=3);
    println!("\n{}", table);
}

pub fn print_trace(ticket: &Ticket, trace: &[ScoreDetails]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Step"),
        Cell::new("Pick").add_attribute(Attribute::Bold),
        Cell::new("Freq"),
        Cell::new("Balance"),
        Cell::new("Pair"),
        Cell::new("Gap"),
        Cell::new("Pattern"),
        Cell::new("Jitter"),
        Cell::new("Total").fg(Color::Cyan),
    ]);

    for (i, d) in trace.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(d.candidate).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", d.frequency)),
            Cell::new(format!("{:.3}", d.balance)),
            Cell::new(format!("{:.3}", d.pair)),
            Cell::new(format!("{:.2}", d.gap)),
            Cell::new(format!("{:.3}", d.pattern)),
            Cell::new(format!("{:.3}", d.jitter)),
            Cell::new(format!("{:.4}", d.total)).fg(Color::Cyan),
        ]);
    }
    align_right(&mut table, 0..=8);
    println!("\nSelection trace for {}\n{}", ticket, table);
}

#[derive(Serialize)]
struct TraceReport<'a> {
    ticket: &'a Ticket,
    steps: &'a [ScoreDetails],
}

pub fn print_trace_json(ticket: &Ticket, trace: &[ScoreDetails]) -> LfResult<()> {
    let report = TraceReport {
        ticket,
        steps: trace,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

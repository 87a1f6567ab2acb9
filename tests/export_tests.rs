use chrono::NaiveDate;
use lottoforge::config::{SelectionParams, StrategyWeights};
use lottoforge::draws::{DrawRecord, HistoricalDataset};
use lottoforge::export::{export_path, export_to_dir, write_entries};
use lottoforge::scorer::Scorer;
use lottoforge::selector::sweep::SweepEntry;
use lottoforge::selector::Selector;
use lottoforge::stats::FrequencyStatistics;
use std::path::Path;
use std::sync::Arc;

fn entries() -> Vec<SweepEntry> {
    let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let records = vec![
        DrawRecord::new(d, &[1, 2, 3, 4, 5, 6, 7]).unwrap(),
        DrawRecord::new(d, &[44, 45, 46, 47, 48, 49, 50]).unwrap(),
    ];
    let stats = FrequencyStatistics::compute(&HistoricalDataset::new("e", records, d)).unwrap();
    let selector = Selector::new(Arc::new(Scorer::new(
        stats,
        SelectionParams::default().without_jitter(),
    )));
    let mut rng = fastrand::Rng::with_seed(0);
    (1..=2)
        .map(|run| SweepEntry::new("balance_heavy", run, selector.run(&StrategyWeights::default(), &mut rng)))
        .collect()
}

#[test]
fn test_csv_layout() {
    let entries = entries();
    let mut buf = Vec::new();
    write_entries(&mut buf, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), &entries).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "draw_date,strategy,run,numbers,high,low,even,odd");
    assert_eq!(lines.len(), 3);

    let row: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(row[0], "03-06-2024");
    assert_eq!(row[1], "balance_heavy");
    assert_eq!(row[2], "1");
    assert_eq!(row[3], entries[0].ticket.joined("-"));
    assert_eq!(row[4].parse::<usize>().unwrap(), entries[0].high);
}

#[test]
fn test_export_file_name() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(
        export_path(Path::new("recommendation_history"), date),
        Path::new("recommendation_history/03-09-2024_recommendations.csv")
    );
}

#[test]
fn test_export_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("history").join("nested");
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

    let path = export_to_dir(&nested, date, &entries()).unwrap();
    assert!(path.exists());
    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 3);
}

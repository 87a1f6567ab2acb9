use crate::consts::PICK_COUNT;
use crate::draws::DrawRecord;
use crate::error::{LfResult, LottoError};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m-%d-%Y", "%B %d %Y", "%A %d %B %Y"];

pub struct LoadReport {
    pub records: Vec<DrawRecord>,
    pub rows_read: usize,
    pub skipped: usize,
}

struct Columns {
    date: usize,
    draw_date: Option<usize>,
    numbers: [usize; PICK_COUNT],
    bonus: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> LfResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| LottoError::Config(format!("missing column '{}'", name)))
        };

        let mut numbers = [0usize; PICK_COUNT];
        for (i, slot) in numbers.iter_mut().enumerate() {
            *slot = require(&format!("Main Numbers {}", i + 1))?;
        }

        Ok(Self {
            date: require("Date")?,
            draw_date: find("Draw Date"),
            numbers,
            bonus: find("Bonus Number"),
        })
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim().replace(',', "");
    // Timestamps such as "2020-01-14 00:00:00" keep only the date part.
    let raw = raw.split(' ').next().filter(|s| s.contains('-')).unwrap_or(raw.as_str());
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Reads the results table. Rows that cannot be parsed or fail draw
/// validation are skipped and counted, never loaded.
pub fn load_draws<R: Read>(reader: R) -> LfResult<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let cols = Columns::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut rows_read = 0;
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        rows_read += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV parse error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        match parse_row(&rec, &cols) {
            Ok(draw) => records.push(draw),
            Err(reason) => {
                warn!("[Row {}] skipped: {}", row_idx + 1, reason);
                skipped += 1;
            }
        }
    }

    debug!(
        "Scanned {} rows. Loaded {} draws, skipped {}.",
        rows_read,
        records.len(),
        skipped
    );

    Ok(LoadReport {
        records,
        rows_read,
        skipped,
    })
}

pub fn load_draws_from_file<P: AsRef<Path>>(path: P) -> LfResult<LoadReport> {
    let path = path.as_ref();
    info!("📂 Loading draws from: {}", path.display());
    let file = File::open(path)?;
    load_draws(file)
}

fn parse_row(rec: &csv::StringRecord, cols: &Columns) -> Result<DrawRecord, String> {
    let field = |idx: usize| rec.get(idx).map(str::trim).unwrap_or("");

    let date = parse_date(field(cols.date))
        .or_else(|| cols.draw_date.and_then(|i| parse_date(field(i))))
        .ok_or_else(|| format!("unparsable date '{}'", field(cols.date)))?;

    let mut numbers = [0u8; PICK_COUNT];
    for (slot, &idx) in numbers.iter_mut().zip(cols.numbers.iter()) {
        let raw = field(idx);
        *slot = raw
            .parse::<u8>()
            .map_err(|_| format!("unparsable number '{}'", raw))?;
    }

    let bonus = cols
        .bonus
        .map(field)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u8>().ok());

    DrawRecord::with_bonus(date, &numbers, bonus).map_err(|e| e.to_string())
}

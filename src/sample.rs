//! The canonical sample dataset used by demos and tests.

use std::fs;
use std::path::Path;

use crate::error::SummaryResult;

/// Header of the sample file.
pub const SAMPLE_HEADER: [&str; 4] = ["id", "value", "category", "amount"];

const SAMPLE_ROWS: [[&str; 4]; 10] = [
    ["1", "100", "A", "50.5"],
    ["2", "200", "B", "75.0"],
    ["3", "150", "A", "60.5"],
    ["4", "300", "C", "90.0"],
    ["5", "120", "B", "55.5"],
    ["6", "180", "A", "70.0"],
    ["7", "250", "C", "85.5"],
    ["8", "140", "B", "65.0"],
    ["9", "220", "A", "80.5"],
    ["10", "160", "C", "72.0"],
];

/// Write the sample (header plus ten rows) to `path`, creating parent directories.
pub fn write_sample(path: impl AsRef<Path>) -> SummaryResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(SAMPLE_HEADER)?;
    for row in SAMPLE_ROWS {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

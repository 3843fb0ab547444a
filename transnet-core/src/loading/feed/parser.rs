use std::fs::File;
use std::path::Path;

use crate::Error;

/// Reads every row of a CSV feed file with headers
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row does not match `T`
pub fn deserialize_feed_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let rows = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

//! Partition addressing: one file per order date
//!
//! File names use a fixed eight-digit month-day-year encoding,
//! `Orders_MMDDYYYY.txt`, so every date with a four-digit year maps to exactly
//! one name and back.

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

use crate::StoreError;

/// Prefix of every partition file name
pub const FILE_PREFIX: &str = "Orders_";
/// Suffix of every partition file name
pub const FILE_SUFFIX: &str = ".txt";

const MAX_YEAR: i32 = 9999;

/// File name for the partition holding `date`.
///
/// Fails for years outside `0..=9999`, which cannot be written as four digits.
pub fn partition_file_name(date: NaiveDate) -> Result<String, StoreError> {
    let year = date.year();
    if !(0..=MAX_YEAR).contains(&year) {
        return Err(StoreError::UnsupportedDate(date));
    }
    Ok(format!(
        "{}{:02}{:02}{:04}{}",
        FILE_PREFIX,
        date.month(),
        date.day(),
        year,
        FILE_SUFFIX
    ))
}

/// Full path of the partition holding `date` inside `dir`.
pub fn partition_path(dir: &Path, date: NaiveDate) -> Result<PathBuf, StoreError> {
    Ok(dir.join(partition_file_name(date)?))
}

/// Recover the order date from a partition file name.
///
/// Returns `None` for anything that is not exactly `Orders_MMDDYYYY.txt` with a
/// real calendar date.
pub fn parse_partition_file_name(name: &str) -> Option<NaiveDate> {
    let digits = name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?;
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month = digits[0..2].parse::<u32>().ok()?;
    let day = digits[2..4].parse::<u32>().ok()?;
    let year = digits[4..8].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_file_name_is_collision_free(days in 0u64..3_000_000) {
            let base = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
            let d = base.checked_add_days(chrono::Days::new(days)).unwrap();
            prop_assume!(d.year() <= MAX_YEAR);

            let name = partition_file_name(d).unwrap();
            prop_assert_eq!(name.len(), FILE_PREFIX.len() + 8 + FILE_SUFFIX.len());
            prop_assert_eq!(parse_partition_file_name(&name), Some(d));
        }
    }
}

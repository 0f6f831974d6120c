//! CSV loading for the sales table.
//!
//! The file is parsed with polars, the columns the dashboard needs are cast to
//! their expected types (CSV inference turns whole-number columns into
//! integers), and the frame is converted row by row into [`SalesRecord`]s.
//! Schema inference scans every row, so a decimal appearing late in an
//! otherwise whole-number column still reads as a float.

use chrono::Utc;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

use super::checksum::calculate_checksum;
use super::error::{DataError, DataResult, ErrorContext};
use super::table::{SalesTable, TableSource};
use crate::models::{columns, Month, SalesRecord};

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "historical_automobile_sales.csv";

/// Load the sales table from a CSV file.
///
/// # Errors
/// - [`DataError::FileNotFound`] if `path` does not exist
/// - [`DataError::Io`] if the file cannot be read
/// - [`DataError::Parse`] if the content is not a well-formed sales table
pub fn load(path: impl AsRef<Path>) -> DataResult<SalesTable> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| DataError::from_io(path, e))?;

    let records = parse_records(&bytes)?;
    let checksum = calculate_checksum(&bytes);
    log::info!(
        "Loaded {} sales records from {} (sha256={})",
        records.len(),
        path.display(),
        checksum
    );

    Ok(SalesTable::new(
        records,
        TableSource {
            path: Some(path.to_path_buf()),
            checksum,
            loaded_at: Utc::now(),
        },
    ))
}

/// Load the sales table from CSV text held in memory.
pub fn load_from_str(csv: &str) -> DataResult<SalesTable> {
    let records = parse_records(csv.as_bytes())?;
    Ok(SalesTable::new(
        records,
        TableSource {
            path: None,
            checksum: calculate_checksum(csv.as_bytes()),
            loaded_at: Utc::now(),
        },
    ))
}

fn parse_records(bytes: &[u8]) -> DataResult<Vec<SalesRecord>> {
    let df = parse_sales_csv(bytes)?;
    dataframe_to_records(&df)
}

/// Parse CSV bytes into a DataFrame holding exactly the required columns.
pub fn parse_sales_csv(bytes: &[u8]) -> DataResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
        .map_err(|e| DataError::parse(e.to_string(), ErrorContext::new("read_csv")))?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in columns::REQUIRED {
        if !column_names.iter().any(|c| c == required) {
            return Err(DataError::parse(
                "Missing required column",
                ErrorContext::new("check_columns")
                    .with_column(required)
                    .with_details(format!("found columns: {}", column_names.join(", "))),
            ));
        }
    }

    let df = df
        .lazy()
        .select([
            col(columns::YEAR).cast(DataType::Int64),
            col(columns::MONTH).cast(DataType::String),
            col(columns::VEHICLE_TYPE).cast(DataType::String),
            col(columns::AUTOMOBILE_SALES).cast(DataType::Float64),
            col(columns::ADVERTISING_EXPENDITURE).cast(DataType::Float64),
            col(columns::UNEMPLOYMENT_RATE).cast(DataType::Float64),
            col(columns::RECESSION).cast(DataType::Float64),
        ])
        .collect()
        .map_err(|e| DataError::parse(e.to_string(), ErrorContext::new("cast_columns")))?;

    Ok(df)
}

/// Convert a typed DataFrame into sales records.
pub fn dataframe_to_records(df: &DataFrame) -> DataResult<Vec<SalesRecord>> {
    let years = df.column(columns::YEAR)?.i64()?;
    let months = df.column(columns::MONTH)?.str()?;
    let vehicle_types = df.column(columns::VEHICLE_TYPE)?.str()?;
    let sales = df.column(columns::AUTOMOBILE_SALES)?.f64()?;
    let advertising = df.column(columns::ADVERTISING_EXPENDITURE)?.f64()?;
    let unemployment = df.column(columns::UNEMPLOYMENT_RATE)?.f64()?;
    let recession = df.column(columns::RECESSION)?.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let year = cell(years.get(i), columns::YEAR, i)?;
        let year = i32::try_from(year).map_err(|_| {
            DataError::parse(
                "Year out of range",
                ErrorContext::new("convert_rows")
                    .with_column(columns::YEAR)
                    .with_row(i)
                    .with_details(year.to_string()),
            )
        })?;

        let month_name = cell(months.get(i), columns::MONTH, i)?;
        let month: Month = month_name.parse().map_err(|e: crate::models::ParseMonthError| {
            DataError::parse(
                e.to_string(),
                ErrorContext::new("convert_rows")
                    .with_column(columns::MONTH)
                    .with_row(i),
            )
        })?;

        let flag = cell(recession.get(i), columns::RECESSION, i)?;
        let recession_flag = match flag {
            f if f == 0.0 => false,
            f if f == 1.0 => true,
            other => {
                return Err(DataError::parse(
                    "Recession flag must be 0 or 1",
                    ErrorContext::new("convert_rows")
                        .with_column(columns::RECESSION)
                        .with_row(i)
                        .with_details(other.to_string()),
                ))
            }
        };

        records.push(SalesRecord {
            year,
            month,
            vehicle_type: cell(vehicle_types.get(i), columns::VEHICLE_TYPE, i)?.to_string(),
            automobile_sales: cell(sales.get(i), columns::AUTOMOBILE_SALES, i)?,
            advertising_expenditure: cell(
                advertising.get(i),
                columns::ADVERTISING_EXPENDITURE,
                i,
            )?,
            unemployment_rate: cell(unemployment.get(i), columns::UNEMPLOYMENT_RATE, i)?,
            recession: recession_flag,
        });
    }

    Ok(records)
}

fn cell<T>(value: Option<T>, column: &str, row: usize) -> DataResult<T> {
    value.ok_or_else(|| {
        DataError::parse(
            "Missing value",
            ErrorContext::new("convert_rows")
                .with_column(column)
                .with_row(row),
        )
    })
}

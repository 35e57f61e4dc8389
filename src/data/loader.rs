use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a reservations/pizzas dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.txt` / `.dat` / no extension – two whitespace-separated columns after
///   one header row (the classic `pizza.txt`)
/// * `.csv`     – header row, reservations and pizzas in the first two columns
/// * `.json`    – `{ "x": [...], "y": [...] }` or
///   `[{ "reservations": 13, "pizzas": 33 }, ...]`
/// * `.parquet` – `reservations` and `pizzas` columns, or the first two
///   numeric columns
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "" | "txt" | "dat" => {
            let text = std::fs::read_to_string(path).context("reading text file")?;
            parse_whitespace(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            parse_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    };
    dataset.with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// Whitespace-delimited text
// ---------------------------------------------------------------------------

/// Layout:
///
/// ```text
/// Reservations  Pizzas
/// 13            33
/// 2             16
/// ```
///
/// The first line is always skipped. Blank lines and `#` comments are
/// ignored; every other line must hold exactly two numbers.
pub fn parse_whitespace(text: &str) -> Result<Dataset> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            bail!("Line {line_no}: expected 2 columns, found {}", fields.len());
        }
        x.push(parse_number(fields[0], line_no, "reservations")?);
        y.push(parse_number(fields[1], line_no, "pizzas")?);
    }

    Ok(Dataset::new(x, y)?)
}

fn parse_number(tok: &str, row: usize, col: &str) -> Result<f64> {
    tok.parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{tok}' is not a number"))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with any column names. Reservations and pizzas
/// are read from the first two columns; further columns are ignored.
pub fn parse_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let n_headers = reader.headers().context("reading CSV headers")?.len();
    if n_headers < 2 {
        bail!("CSV header has {n_headers} column(s), expected at least 2");
    }

    let mut x = Vec::new();
    let mut y = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        x.push(parse_number(&record[0], row_no, "reservations")?);
        y.push(parse_number(&record[1], row_no, "pizzas")?);
    }

    Ok(Dataset::new(x, y)?)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDataset {
    Columns { x: Vec<f64>, y: Vec<f64> },
    Records(Vec<JsonRecord>),
}

#[derive(Deserialize)]
struct JsonRecord {
    #[serde(alias = "x")]
    reservations: f64,
    #[serde(alias = "y")]
    pizzas: f64,
}

/// Accepts either a column object or a list of row records.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let parsed: JsonDataset = serde_json::from_str(text).context(
        "expected {\"x\": [...], \"y\": [...]} or [{\"reservations\": .., \"pizzas\": ..}]",
    )?;

    let (x, y) = match parsed {
        JsonDataset::Columns { x, y } => (x, y),
        JsonDataset::Records(records) => records
            .into_iter()
            .map(|r| (r.reservations, r.pizzas))
            .unzip(),
    };
    Ok(Dataset::new(x, y)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one row per observation.
///
/// Columns named `reservations` and `pizzas` are used when present;
/// otherwise the first two numeric columns (Int32/Int64/Float32/Float64).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let (x_idx, y_idx) = pick_columns(builder.schema())?;
    let reader = builder.build().context("building parquet reader")?;

    let mut x = Vec::new();
    let mut y = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        x.extend(column_to_f64(batch.column(x_idx)).context("reading reservations column")?);
        y.extend(column_to_f64(batch.column(y_idx)).context("reading pizzas column")?);
    }

    Ok(Dataset::new(x, y)?)
}

// -- Parquet / Arrow helpers --

fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64
    )
}

fn pick_columns(schema: &Schema) -> Result<(usize, usize)> {
    if let (Ok(x), Ok(y)) = (schema.index_of("reservations"), schema.index_of("pizzas")) {
        return Ok((x, y));
    }
    let numeric: Vec<usize> = schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| is_numeric(f.data_type()))
        .map(|(i, _)| i)
        .collect();
    match numeric.as_slice() {
        [x, y, ..] => Ok((*x, *y)),
        _ => bail!("Parquet file needs two numeric columns, found {}", numeric.len()),
    }
}

fn column_to_f64(col: &ArrayRef) -> Result<Vec<f64>> {
    if !is_numeric(col.data_type()) {
        bail!("Expected a numeric column, got {:?}", col.data_type());
    }
    if col.null_count() > 0 {
        bail!("{} null value(s) in numeric column", col.null_count());
    }
    let as_f64 = cast(col, &DataType::Float64).context("casting column to Float64")?;
    let values = as_f64
        .as_primitive_opt::<Float64Type>()
        .context("expected Float64Array after cast")?;
    Ok(values.values().to_vec())
}

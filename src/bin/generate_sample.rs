//! Writes a synthetic reservations/pizzas dataset.
//!
//! ```text
//! generate_sample [ROWS] [STEM]
//! ```
//!
//! Produces `STEM.txt` (same layout as `pizza.txt`) and `STEM.parquet`;
//! `STEM` defaults to `sample` so the shipped dataset is never overwritten.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::Float64Array;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const TRUE_WEIGHT: f64 = 1.1;
const TRUE_BIAS: f64 = 13.0;
const NOISE: f64 = 2.5;
const DEFAULT_ROWS: usize = 30;
const DEFAULT_STEM: &str = "sample";
const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let rows = match args.next() {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("row count '{n}' is not a whole number"))?,
        None => DEFAULT_ROWS,
    };
    let stem = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_STEM.to_string()));

    let (reservations, pizzas) = observations(rows, SEED)?;

    let txt_path = stem.with_extension("txt");
    std::fs::write(&txt_path, to_text(&reservations, &pizzas)?)
        .with_context(|| format!("writing {}", txt_path.display()))?;

    let parquet_path = stem.with_extension("parquet");
    write_parquet(&parquet_path, reservations, pizzas)?;

    log::info!(
        "Wrote {rows} observations to {} and {}",
        txt_path.display(),
        parquet_path.display()
    );
    Ok(())
}

/// Whole-number reservations in `[0, 30)` and rounded, non-negative pizza
/// counts scattered around `TRUE_WEIGHT * r + TRUE_BIAS`.
fn observations(rows: usize, seed: u64) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, NOISE).context("noise distribution")?;

    let reservations: Vec<f64> = (0..rows)
        .map(|_| f64::from(rng.random_range(0..30u32)))
        .collect();
    let pizzas = reservations
        .iter()
        .map(|&r| (TRUE_WEIGHT * r + TRUE_BIAS + noise.sample(&mut rng)).round().max(0.0))
        .collect();
    Ok((reservations, pizzas))
}

fn to_text(reservations: &[f64], pizzas: &[f64]) -> Result<String> {
    let mut text = String::from("Reservations  Pizzas\n");
    for (r, p) in reservations.iter().zip(pizzas) {
        writeln!(text, "{r:<12}  {p}")?;
    }
    Ok(text)
}

fn write_parquet(path: &Path, reservations: Vec<f64>, pizzas: Vec<f64>) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("reservations", DataType::Float64, false),
        Field::new("pizzas", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Float64Array::from(reservations)),
            Arc::new(Float64Array::from(pizzas)),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pizza_fit::data::loader::{load_file, parse_whitespace};

    use super::*;

    #[test]
    fn same_seed_same_data() {
        assert_eq!(observations(20, 7).unwrap(), observations(20, 7).unwrap());
    }

    #[test]
    fn text_output_loads_back() {
        let (x, y) = observations(12, SEED).unwrap();
        assert!(x.iter().all(|&r| (0.0..30.0).contains(&r) && r.fract() == 0.0));
        assert!(y.iter().all(|&p| p >= 0.0));

        let ds = parse_whitespace(&to_text(&x, &y).unwrap()).unwrap();
        assert_eq!(ds.x().to_vec(), x);
        assert_eq!(ds.y().to_vec(), y);
    }

    #[test]
    fn parquet_output_loads_back() {
        let (x, y) = observations(8, SEED).unwrap();
        let path =
            std::env::temp_dir().join(format!("pizza-fit-sample-{}.parquet", std::process::id()));
        write_parquet(&path, x.clone(), y.clone()).unwrap();
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(ds.x().to_vec(), x);
        assert_eq!(ds.y().to_vec(), y);
    }
}

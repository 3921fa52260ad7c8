//! `query`: filtered observations and derived metrics as CSV.

use crate::pipeline::{fetch_selection, open_output, Selection};
use log::info;
use serde::Serialize;
use std::io::Write;
use wxc_data::DateRange;

#[derive(Serialize)]
struct Row<'a> {
    date: &'a str,
    temperature: f64,
    humidity: f64,
    heat_index: f64,
    temperature_variance: f64,
}

/// Write one CSV row per observation, with a header.
pub fn write_csv<W: Write>(selection: &Selection, out: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    let derived = &selection.derived;
    for ((obs, heat_index), temperature_variance) in selection
        .series
        .observations()
        .zip(&derived.heat_index)
        .zip(&derived.temperature_variance)
    {
        wtr.serialize(Row {
            date: obs.date,
            temperature: obs.temperature,
            humidity: obs.humidity,
            heat_index: *heat_index,
            temperature_variance: *temperature_variance,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Fetch, filter and write the CSV to `output` (stdout when `None`).
///
/// An empty selection writes nothing.
pub async fn run_query(range: &DateRange, output: Option<&str>) -> anyhow::Result<()> {
    let Some(selection) = fetch_selection(range).await? else {
        return Ok(());
    };
    write_csv(&selection, open_output(output)?)?;
    info!(
        "Wrote {} observations to {}",
        selection.series.len(),
        output.unwrap_or("stdout")
    );
    Ok(())
}

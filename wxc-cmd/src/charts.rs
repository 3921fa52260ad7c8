//! `charts`: the four Chart.js configurations as a JSON array.

use crate::pipeline::{fetch_selection, open_output, Selection};
use log::info;
use std::io::Write;
use wxc_data::charts::chart_specs;
use wxc_data::DateRange;

/// Write `[{surface, config}, ...]` in render order.
pub fn write_chart_json<W: Write>(selection: &Selection, mut out: W) -> anyhow::Result<()> {
    let charts: Vec<serde_json::Value> = chart_specs(&selection.series, &selection.derived)
        .iter()
        .map(|spec| {
            Ok(serde_json::json!({
                "surface": spec.surface_id(),
                "config": serde_json::to_value(spec)?,
            }))
        })
        .collect::<serde_json::Result<_>>()?;
    serde_json::to_writer_pretty(&mut out, &charts)?;
    writeln!(out)?;
    Ok(())
}

/// Fetch, filter and write the chart JSON to `output` (stdout when `None`).
pub async fn run_charts(range: &DateRange, output: Option<&str>) -> anyhow::Result<()> {
    let Some(selection) = fetch_selection(range).await? else {
        return Ok(());
    };
    write_chart_json(&selection, open_output(output)?)?;
    info!("Wrote chart configurations to {}", output.unwrap_or("stdout"));
    Ok(())
}

//! Size comparison between compact interchange text and JSON.

use serde::Serialize;

use gbln_core::{Engine, Error};
use gbln_interchange::{encode, json_error, to_json, Native};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeComparison {
    pub compact_bytes: usize,
    pub json_bytes: usize,
    pub savings_percent: f64,
}

/// `round((1 - compact/json) * 100, 2)`, or `0.0` when `json` is zero.
pub fn savings_percent(compact: usize, json: usize) -> f64 {
    if json == 0 {
        return 0.0;
    }
    let percent = (1.0 - compact as f64 / json as f64) * 100.0;
    (percent * 100.0).round() / 100.0
}

/// Serialise `native` once as compact interchange text and once as compact
/// JSON and compare the byte counts.
pub fn compare_sizes<E: Engine + ?Sized>(
    engine: &E,
    native: &Native,
) -> Result<SizeComparison, Error> {
    let compact = engine.print_compact(&encode(native)?);
    let json = serde_json::to_string(&to_json(native)?).map_err(json_error)?;
    Ok(SizeComparison {
        compact_bytes: compact.len(),
        json_bytes: json.len(),
        savings_percent: savings_percent(compact.len(), json.len()),
    })
}

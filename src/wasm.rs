//! WebAssembly bindings.
//!
//! Criteria and candidates cross the boundary as plain JS objects:
//!
//! ```text
//! criteria:   [{ id, name, weight, polarity: "benefit" | "cost" }]
//! candidates: [{ id, name, scores: { [criterionId]: number } }]
//! ```
//!
//! Results come back as `[{ candidateId, utilityScore, rank }]`.

use wasm_bindgen::prelude::*;

use crate::smart::{Candidate, Criterion, SmartConfig, SmartRunner, TieBreaker};

/// Runs a SMART calculation on JS inputs.
///
/// `tie_break_by_id` selects [`TieBreaker::ById`]; otherwise input order wins.
/// Errors are returned as JS strings.
#[wasm_bindgen(js_name = calculateSmart)]
pub fn calculate_smart(
    criteria: JsValue,
    candidates: JsValue,
    tie_break_by_id: Option<bool>,
) -> Result<JsValue, JsValue> {
    let criteria: Vec<Criterion> = serde_wasm_bindgen::from_value(criteria)?;
    let candidates: Vec<Candidate> = serde_wasm_bindgen::from_value(candidates)?;

    let tie_breaker = if tie_break_by_id.unwrap_or(false) {
        TieBreaker::ById
    } else {
        TieBreaker::InputOrder
    };
    let config = SmartConfig::default().with_tie_breaker(tie_breaker);

    let outcome = SmartRunner::run(&criteria, &candidates, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&outcome.results)?)
}

use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use bank_readiness_core::bank_readiness::case::{CaseInput, MonthlyInflowBand, RiskCategory};
use bank_readiness_core::bank_readiness::engine::{AssessOptions, BankReadinessEngine};
use rust_decimal::Decimal;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Case plus an optional precomputed risk category.
#[derive(Deserialize)]
struct CategorizedCase {
    case: CaseInput,
    #[serde(default)]
    category: Option<RiskCategory>,
}

impl CategorizedCase {
    fn parse(input_json: &str, engine: &BankReadinessEngine) -> NapiResult<(CaseInput, RiskCategory)> {
        let input: CategorizedCase = serde_json::from_str(input_json).map_err(to_napi_error)?;
        let category = match input.category {
            Some(c) => c,
            None => engine.assess_risk(&input.case).category,
        };
        Ok((input.case, category))
    }
}

#[derive(Deserialize)]
struct AssessRequest {
    case: CaseInput,
    #[serde(default)]
    strict: bool,
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Accepts either a bare case or `{ "case": ..., "strict": bool }`.
#[napi]
pub fn assess_bank_readiness(input_json: String) -> NapiResult<String> {
    let value: serde_json::Value = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let request: AssessRequest = if value.get("case").is_some() {
        serde_json::from_value(value).map_err(to_napi_error)?
    } else {
        AssessRequest {
            case: serde_json::from_value(value).map_err(to_napi_error)?,
            strict: false,
        }
    };
    let output = BankReadinessEngine::default()
        .assess(&request.case, AssessOptions { strict: request.strict })
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn assess_risk(input_json: String) -> NapiResult<String> {
    let input: CaseInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = BankReadinessEngine::default().assess_risk(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[napi]
pub fn match_banks(input_json: String) -> NapiResult<String> {
    let engine = BankReadinessEngine::default();
    let input: CaseInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let risk = engine.assess_risk(&input);
    let output = engine.match_banks(&input, &risk);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Guidance
// ---------------------------------------------------------------------------

#[napi]
pub fn required_documents(input_json: String) -> NapiResult<String> {
    let engine = BankReadinessEngine::default();
    let (case, category) = CategorizedCase::parse(&input_json, &engine)?;
    serde_json::to_string(&engine.required_documents(&case, category)).map_err(to_napi_error)
}

#[napi]
pub fn helpful_documents(input_json: String) -> NapiResult<String> {
    let engine = BankReadinessEngine::default();
    let (case, category) = CategorizedCase::parse(&input_json, &engine)?;
    serde_json::to_string(&engine.helpful_documents(&case, category)).map_err(to_napi_error)
}

#[napi]
pub fn interview_guidance(input_json: String) -> NapiResult<String> {
    let engine = BankReadinessEngine::default();
    let (case, category) = CategorizedCase::parse(&input_json, &engine)?;
    serde_json::to_string(&engine.interview_guidance(&case, category)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn list_banks() -> NapiResult<String> {
    let engine = BankReadinessEngine::default();
    serde_json::to_string(engine.catalog()).map_err(to_napi_error)
}

/// Takes a decimal AED amount as a string, e.g. "250000".
#[napi]
pub fn classify_inflow(amount: String) -> NapiResult<String> {
    let amount: Decimal = amount.trim().parse().map_err(to_napi_error)?;
    let band = MonthlyInflowBand::from_amount(amount).map_err(to_napi_error)?;
    serde_json::to_string(&band).map_err(to_napi_error)
}

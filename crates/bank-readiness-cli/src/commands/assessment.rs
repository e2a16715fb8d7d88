use clap::Args;
use log::warn;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use bank_readiness_core::bank_readiness::case::{CaseInput, MonthlyInflowBand, RiskCategory};
use bank_readiness_core::bank_readiness::engine::{AssessOptions, BankReadinessEngine};
use bank_readiness_core::bank_readiness::validation::validate_case_input;

use super::{load_engine, parse_choice, GlobalOptions};
use crate::input;

/// Case description: a file, piped stdin, or individual flags.
#[derive(Args)]
pub struct CaseArgs {
    /// Path to a JSON or YAML case file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Applicant nationality, e.g. "India"
    #[arg(long)]
    pub nationality: Option<String>,

    /// Company jurisdiction: mainland or freezone
    #[arg(long)]
    pub jurisdiction: Option<String>,

    /// Business model: trading, service, consulting, tech, other
    #[arg(long)]
    pub business_model: Option<String>,

    /// Licence activity as written on the trade licence
    #[arg(long)]
    pub activity: Option<String>,

    /// Expected monthly inflow band, e.g. 100k_500k
    #[arg(long, conflicts_with = "inflow_amount")]
    pub inflow: Option<String>,

    /// Expected monthly inflow in AED; classified into a band
    #[arg(long)]
    pub inflow_amount: Option<Decimal>,

    /// Source of funds, e.g. business_revenue, gift, loan_financing
    #[arg(long)]
    pub source_of_funds: Option<String>,

    /// Applicant holds a UAE residency visa
    #[arg(long)]
    pub resident: bool,

    /// Applicant was previously refused a UAE bank account
    #[arg(long)]
    pub previous_rejection: bool,

    /// Country sending payments to the company (repeatable)
    #[arg(long = "payment-country")]
    pub payment_countries: Vec<String>,
}

impl CaseArgs {
    fn into_case(self) -> Result<CaseInput, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_document(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }

        let nationality = self
            .nationality
            .ok_or("--nationality is required (or provide --input)")?;
        let jurisdiction = self
            .jurisdiction
            .ok_or("--jurisdiction is required (or provide --input)")?;
        let business_model = self
            .business_model
            .ok_or("--business-model is required (or provide --input)")?;
        let activity = self
            .activity
            .ok_or("--activity is required (or provide --input)")?;
        let source_of_funds = self
            .source_of_funds
            .ok_or("--source-of-funds is required (or provide --input)")?;

        let expected_monthly_inflow = match (self.inflow, self.inflow_amount) {
            (_, Some(amount)) => MonthlyInflowBand::from_amount(amount)?,
            (Some(band), None) => parse_choice("inflow", &band)?,
            (None, None) => {
                return Err("--inflow or --inflow-amount is required (or provide --input)".into())
            }
        };

        Ok(CaseInput {
            applicant_nationality: nationality,
            company_jurisdiction: parse_choice("jurisdiction", &jurisdiction)?,
            business_model: parse_choice("business-model", &business_model)?,
            license_activity: activity,
            expected_monthly_inflow,
            source_of_funds: parse_choice("source-of-funds", &source_of_funds)?,
            uae_residency: self.resident,
            previous_rejection: self.previous_rejection,
            incoming_payment_countries: self.payment_countries,
        })
    }
}

/// Read the case and, under `--strict`, validate it before any scoring.
fn prepare(
    args: CaseArgs,
    opts: &GlobalOptions,
) -> Result<(BankReadinessEngine, CaseInput), Box<dyn std::error::Error>> {
    let case = args.into_case()?;
    if opts.strict {
        for warning in validate_case_input(&case)? {
            warn!("{}", warning);
        }
    }
    Ok((load_engine(opts)?, case))
}

/// Arguments for the full assessment
#[derive(Args)]
pub struct AssessArgs {
    #[command(flatten)]
    pub case: CaseArgs,
}

pub fn run_assess(args: AssessArgs, opts: &GlobalOptions) -> Result<Value, Box<dyn std::error::Error>> {
    let case = args.case.into_case()?;
    let engine = load_engine(opts)?;
    let output = engine.assess(&case, AssessOptions { strict: opts.strict })?;
    Ok(serde_json::to_value(output)?)
}

/// Arguments for risk scoring only
#[derive(Args)]
pub struct RiskArgs {
    #[command(flatten)]
    pub case: CaseArgs,
}

pub fn run_risk(args: RiskArgs, opts: &GlobalOptions) -> Result<Value, Box<dyn std::error::Error>> {
    let (engine, case) = prepare(args.case, opts)?;
    let result = engine.assess_risk(&case);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for bank matching
#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub case: CaseArgs,
}

pub fn run_match(args: MatchArgs, opts: &GlobalOptions) -> Result<Value, Box<dyn std::error::Error>> {
    let (engine, case) = prepare(args.case, opts)?;
    let risk = engine.assess_risk(&case);
    let matches = engine.match_banks(&case, &risk);
    Ok(serde_json::to_value(matches)?)
}

/// Arguments for document and interview checklists
#[derive(Args)]
pub struct GuidanceArgs {
    #[command(flatten)]
    pub case: CaseArgs,

    /// Override the computed risk category (low, medium, high)
    #[arg(long)]
    pub category: Option<String>,
}

fn resolve_category(
    engine: &BankReadinessEngine,
    case: &CaseInput,
    raw: Option<&str>,
) -> Result<RiskCategory, Box<dyn std::error::Error>> {
    match raw {
        Some(raw) => parse_choice("category", raw),
        None => Ok(engine.assess_risk(case).category),
    }
}

pub fn run_documents(
    args: GuidanceArgs,
    opts: &GlobalOptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let (engine, case) = prepare(args.case, opts)?;
    let category = resolve_category(&engine, &case, args.category.as_deref())?;
    Ok(json!({
        "category": category,
        "required_documents": engine.required_documents(&case, category),
        "helpful_documents": engine.helpful_documents(&case, category),
    }))
}

pub fn run_interview(
    args: GuidanceArgs,
    opts: &GlobalOptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let (engine, case) = prepare(args.case, opts)?;
    let category = resolve_category(&engine, &case, args.category.as_deref())?;
    Ok(json!({
        "category": category,
        "interview_guidance": engine.interview_guidance(&case, category),
    }))
}

use log::debug;
use serde::{Deserialize, Serialize};

use super::case::{
    BusinessModel, CaseInput, CompanyJurisdiction, MonthlyInflowBand, RiskCategory, SourceOfFunds,
};
use super::risk_lists::{
    find_keyword, first_elevated_country, first_sanctioned_country, is_high_risk_nationality,
    is_medium_risk_nationality, HIGH_RISK_ACTIVITY_KEYWORDS, MEDIUM_RISK_ACTIVITY_KEYWORDS,
};

// ---------------------------------------------------------------------------
// Weights and thresholds
// ---------------------------------------------------------------------------

const NATIONALITY_HIGH: u32 = 25;
const NATIONALITY_MEDIUM: u32 = 12;
const NON_RESIDENT: u32 = 12;
const FREEZONE: u32 = 3;
const MODEL_TRADING: u32 = 12;
const MODEL_OTHER: u32 = 6;
const ACTIVITY_HIGH: u32 = 20;
const ACTIVITY_MEDIUM: u32 = 10;
const INFLOW_TOP_BAND: u32 = 5;
const INFLOW_BOTTOM_BAND: u32 = 4;
const FUNDS_HIGH: u32 = 12;
const FUNDS_MEDIUM: u32 = 6;
const COUNTRY_SANCTIONED: u32 = 25;
const COUNTRY_ELEVATED: u32 = 12;
const PREVIOUS_REJECTION: u32 = 18;

const MAX_SCORE: u32 = 100;
/// Scores at or below this are low risk.
const LOW_CEILING: u32 = 25;
/// Scores at or below this (and above `LOW_CEILING`) are medium risk.
const MEDIUM_CEILING: u32 = 55;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Nationality,
    UaeResidency,
    Jurisdiction,
    BusinessModel,
    LicenseActivity,
    MonthlyInflow,
    SourceOfFunds,
    PaymentCountries,
    PreviousRejection,
}

impl RiskFactor {
    /// Evaluation order. Flags are emitted in this order.
    pub const ORDER: [RiskFactor; 9] = [
        RiskFactor::Nationality,
        RiskFactor::UaeResidency,
        RiskFactor::Jurisdiction,
        RiskFactor::BusinessModel,
        RiskFactor::LicenseActivity,
        RiskFactor::MonthlyInflow,
        RiskFactor::SourceOfFunds,
        RiskFactor::PaymentCountries,
        RiskFactor::PreviousRejection,
    ];

    /// Ceiling for this factor's contribution.
    pub fn max_points(self) -> u32 {
        match self {
            RiskFactor::Nationality => NATIONALITY_HIGH,
            RiskFactor::UaeResidency => NON_RESIDENT,
            RiskFactor::Jurisdiction => FREEZONE,
            RiskFactor::BusinessModel => MODEL_TRADING,
            RiskFactor::LicenseActivity => ACTIVITY_HIGH,
            RiskFactor::MonthlyInflow => INFLOW_TOP_BAND,
            RiskFactor::SourceOfFunds => FUNDS_HIGH,
            RiskFactor::PaymentCountries => COUNTRY_SANCTIONED,
            RiskFactor::PreviousRejection => PREVIOUS_REJECTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactorScore {
    pub factor: RiskFactor,
    pub points: u32,
    pub max_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    /// Clamped to 0–100.
    pub score: u32,
    pub category: RiskCategory,
    /// One per contributing factor, in evaluation order.
    pub flags: Vec<String>,
    /// Every factor in evaluation order, including those scoring zero.
    pub breakdown: Vec<RiskFactorScore>,
}

/// Points and flag for one triggered factor.
struct Contribution {
    points: u32,
    flag: String,
}

impl Contribution {
    fn new(points: u32, flag: impl Into<String>) -> Option<Self> {
        Some(Contribution {
            points,
            flag: flag.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Factor scoring
// ---------------------------------------------------------------------------

fn score_nationality(input: &CaseInput) -> Option<Contribution> {
    let nationality = input.applicant_nationality.trim();
    if is_high_risk_nationality(nationality) {
        Contribution::new(
            NATIONALITY_HIGH,
            format!("High-risk nationality ({})", nationality),
        )
    } else if is_medium_risk_nationality(nationality) {
        Contribution::new(
            NATIONALITY_MEDIUM,
            format!("Elevated-risk nationality ({})", nationality),
        )
    } else {
        None
    }
}

fn score_residency(input: &CaseInput) -> Option<Contribution> {
    if input.is_non_resident() {
        Contribution::new(NON_RESIDENT, "Non-resident applicant (no UAE residency visa)")
    } else {
        None
    }
}

fn score_jurisdiction(input: &CaseInput) -> Option<Contribution> {
    match input.company_jurisdiction {
        CompanyJurisdiction::Freezone => {
            Contribution::new(FREEZONE, "Free zone company (additional bank scrutiny)")
        }
        _ => None,
    }
}

fn score_business_model(input: &CaseInput) -> Option<Contribution> {
    match input.business_model {
        BusinessModel::Trading => Contribution::new(
            MODEL_TRADING,
            "Trading business model (higher AML scrutiny)",
        ),
        BusinessModel::Other => {
            Contribution::new(MODEL_OTHER, "Non-standard business model")
        }
        _ => None,
    }
}

fn score_activity(input: &CaseInput) -> Option<Contribution> {
    let activity = &input.license_activity;
    if let Some(keyword) = find_keyword(activity, HIGH_RISK_ACTIVITY_KEYWORDS) {
        Contribution::new(
            ACTIVITY_HIGH,
            format!("High-risk licence activity ({})", keyword),
        )
    } else if let Some(keyword) = find_keyword(activity, MEDIUM_RISK_ACTIVITY_KEYWORDS) {
        Contribution::new(
            ACTIVITY_MEDIUM,
            format!("Elevated-risk licence activity ({})", keyword),
        )
    } else {
        None
    }
}

fn score_inflow(input: &CaseInput) -> Option<Contribution> {
    match input.expected_monthly_inflow {
        MonthlyInflowBand::Over5m => Contribution::new(
            INFLOW_TOP_BAND,
            "Very high expected monthly inflow (above AED 5M)",
        ),
        MonthlyInflowBand::Under50k => Contribution::new(
            INFLOW_BOTTOM_BAND,
            "Low expected monthly inflow (below AED 50,000)",
        ),
        _ => None,
    }
}

fn score_source_of_funds(input: &CaseInput) -> Option<Contribution> {
    let source = input.source_of_funds;
    match source {
        SourceOfFunds::Gift | SourceOfFunds::Other | SourceOfFunds::LoanFinancing => {
            Contribution::new(FUNDS_HIGH, format!("High-risk source of funds ({})", source))
        }
        SourceOfFunds::Inheritance | SourceOfFunds::SaleOfProperty => Contribution::new(
            FUNDS_MEDIUM,
            format!("Source of funds needs supporting evidence ({})", source),
        ),
        _ => None,
    }
}

fn score_payment_countries(input: &CaseInput) -> Option<Contribution> {
    let countries = &input.incoming_payment_countries;
    if let Some(country) = first_sanctioned_country(countries) {
        Contribution::new(
            COUNTRY_SANCTIONED,
            format!("Incoming payments from sanctioned/high-risk country ({})", country),
        )
    } else if let Some(country) = first_elevated_country(countries) {
        Contribution::new(
            COUNTRY_ELEVATED,
            format!("Incoming payments from elevated-risk country ({})", country),
        )
    } else {
        None
    }
}

fn score_previous_rejection(input: &CaseInput) -> Option<Contribution> {
    if input.previous_rejection {
        Contribution::new(PREVIOUS_REJECTION, "Previous bank account rejection")
    } else {
        None
    }
}

fn score_factor(factor: RiskFactor, input: &CaseInput) -> Option<Contribution> {
    match factor {
        RiskFactor::Nationality => score_nationality(input),
        RiskFactor::UaeResidency => score_residency(input),
        RiskFactor::Jurisdiction => score_jurisdiction(input),
        RiskFactor::BusinessModel => score_business_model(input),
        RiskFactor::LicenseActivity => score_activity(input),
        RiskFactor::MonthlyInflow => score_inflow(input),
        RiskFactor::SourceOfFunds => score_source_of_funds(input),
        RiskFactor::PaymentCountries => score_payment_countries(input),
        RiskFactor::PreviousRejection => score_previous_rejection(input),
    }
}

/// Map a clamped score to its tier.
pub fn categorize(score: u32) -> RiskCategory {
    if score <= LOW_CEILING {
        RiskCategory::Low
    } else if score <= MEDIUM_CEILING {
        RiskCategory::Medium
    } else {
        RiskCategory::High
    }
}

// ---------------------------------------------------------------------------
// Main public function
// ---------------------------------------------------------------------------

/// Score an applicant's bank-account risk.
///
/// Additive over nine independent factors, clamped to 100. Total: unknown
/// values contribute nothing rather than failing.
pub fn assess_risk(input: &CaseInput) -> RiskAssessmentResult {
    let mut total = 0u32;
    let mut flags = Vec::new();
    let mut breakdown = Vec::with_capacity(RiskFactor::ORDER.len());

    for factor in RiskFactor::ORDER {
        let points = match score_factor(factor, input) {
            Some(c) if c.points > 0 => {
                debug!("risk factor {:?}: +{} ({})", factor, c.points, c.flag);
                flags.push(c.flag);
                c.points
            }
            _ => 0,
        };
        total += points;
        breakdown.push(RiskFactorScore {
            factor,
            points,
            max_points: factor.max_points(),
        });
    }

    let score = total.min(MAX_SCORE);
    let category = categorize(score);
    debug!(
        "risk assessment: raw {} clamped {} category {}",
        total, score, category
    );

    RiskAssessmentResult {
        score,
        category,
        flags,
        breakdown,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{types::Aed, BankReadinessError, BankReadinessResult};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Where the applicant company is licensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyJurisdiction {
    Mainland,
    Freezone,
    #[serde(other)]
    Unrecognised,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessModel {
    Trading,
    Service,
    Consulting,
    Tech,
    Other,
    #[serde(other)]
    Unrecognised,
}

/// Expected monthly inflow, in six ordered AED bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthlyInflowBand {
    #[serde(rename = "under_50k")]
    Under50k,
    #[serde(rename = "50k_100k")]
    From50kTo100k,
    #[serde(rename = "100k_500k")]
    From100kTo500k,
    #[serde(rename = "500k_1m")]
    From500kTo1m,
    #[serde(rename = "1m_5m")]
    From1mTo5m,
    #[serde(rename = "over_5m")]
    Over5m,
    #[serde(other, rename = "unrecognised")]
    Unrecognised,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOfFunds {
    BusinessRevenue,
    SalarySavings,
    InvestmentReturns,
    Inheritance,
    SaleOfProperty,
    Gift,
    LoanFinancing,
    /// Declared as "other" by the applicant. Distinct from an unrecognised value.
    Other,
    #[serde(other)]
    Unrecognised,
}

/// Three-tier risk classification. Ordered low < medium < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

// ---------------------------------------------------------------------------
// Band rank lookup
// ---------------------------------------------------------------------------

/// Ordinal rank of each band. Unrecognised bands rank below every real band.
const INFLOW_BAND_RANKS: &[(MonthlyInflowBand, u8)] = &[
    (MonthlyInflowBand::Under50k, 1),
    (MonthlyInflowBand::From50kTo100k, 2),
    (MonthlyInflowBand::From100kTo500k, 3),
    (MonthlyInflowBand::From500kTo1m, 4),
    (MonthlyInflowBand::From1mTo5m, 5),
    (MonthlyInflowBand::Over5m, 6),
];

/// Lower bound (inclusive) of each band in AED, ascending.
const INFLOW_BAND_FLOORS: &[(MonthlyInflowBand, Decimal)] = &[
    (MonthlyInflowBand::Under50k, dec!(0)),
    (MonthlyInflowBand::From50kTo100k, dec!(50_000)),
    (MonthlyInflowBand::From100kTo500k, dec!(100_000)),
    (MonthlyInflowBand::From500kTo1m, dec!(500_000)),
    (MonthlyInflowBand::From1mTo5m, dec!(1_000_000)),
];

/// Amounts strictly above this fall in the top band.
const TOP_BAND_THRESHOLD: Decimal = dec!(5_000_000);

impl MonthlyInflowBand {
    pub const ALL: [MonthlyInflowBand; 6] = [
        MonthlyInflowBand::Under50k,
        MonthlyInflowBand::From50kTo100k,
        MonthlyInflowBand::From100kTo500k,
        MonthlyInflowBand::From500kTo1m,
        MonthlyInflowBand::From1mTo5m,
        MonthlyInflowBand::Over5m,
    ];

    /// Position on the 1–6 ordinal scale; 0 when unrecognised.
    pub fn rank(self) -> u8 {
        INFLOW_BAND_RANKS
            .iter()
            .find(|(band, _)| *band == self)
            .map(|(_, rank)| *rank)
            .unwrap_or(0)
    }

    /// AED lower bound of the band, if it is a real band. Inclusive for
    /// every band except the top one, which starts strictly above it.
    pub fn floor_aed(self) -> Option<Aed> {
        if self == MonthlyInflowBand::Over5m {
            return Some(TOP_BAND_THRESHOLD);
        }
        INFLOW_BAND_FLOORS
            .iter()
            .find(|(band, _)| *band == self)
            .map(|(_, floor)| *floor)
    }

    /// Classify a raw monthly AED amount into its band.
    pub fn from_amount(amount: Aed) -> BankReadinessResult<MonthlyInflowBand> {
        if amount < Decimal::ZERO {
            return Err(BankReadinessError::InvalidInput {
                field: "expected_monthly_inflow".to_string(),
                reason: "Monthly inflow must be non-negative".to_string(),
            });
        }
        if amount > TOP_BAND_THRESHOLD {
            return Ok(MonthlyInflowBand::Over5m);
        }
        let band = INFLOW_BAND_FLOORS
            .iter()
            .rev()
            .find(|(_, floor)| amount >= *floor)
            .map(|(band, _)| *band)
            .unwrap_or(MonthlyInflowBand::Under50k);
        Ok(band)
    }

    pub fn label(self) -> &'static str {
        match self {
            MonthlyInflowBand::Under50k => "Below AED 50,000",
            MonthlyInflowBand::From50kTo100k => "AED 50,000–100,000",
            MonthlyInflowBand::From100kTo500k => "AED 100,000–500,000",
            MonthlyInflowBand::From500kTo1m => "AED 500,000–1,000,000",
            MonthlyInflowBand::From1mTo5m => "AED 1,000,000–5,000,000",
            MonthlyInflowBand::Over5m => "Above AED 5,000,000",
            MonthlyInflowBand::Unrecognised => "Unrecognised band",
        }
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

impl fmt::Display for CompanyJurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompanyJurisdiction::Mainland => "mainland",
            CompanyJurisdiction::Freezone => "free zone",
            CompanyJurisdiction::Unrecognised => "unrecognised jurisdiction",
        };
        f.write_str(s)
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BusinessModel::Trading => "trading",
            BusinessModel::Service => "service",
            BusinessModel::Consulting => "consulting",
            BusinessModel::Tech => "tech",
            BusinessModel::Other => "other",
            BusinessModel::Unrecognised => "unrecognised",
        };
        f.write_str(s)
    }
}

impl fmt::Display for SourceOfFunds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceOfFunds::BusinessRevenue => "Business Revenue",
            SourceOfFunds::SalarySavings => "Salary / Savings",
            SourceOfFunds::InvestmentReturns => "Investment Returns",
            SourceOfFunds::Inheritance => "Inheritance",
            SourceOfFunds::SaleOfProperty => "Sale of Property",
            SourceOfFunds::Gift => "Gift",
            SourceOfFunds::LoanFinancing => "Loan/Financing",
            SourceOfFunds::Other => "Other",
            SourceOfFunds::Unrecognised => "Unrecognised",
        };
        f.write_str(s)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Case input
// ---------------------------------------------------------------------------

/// A prospective bank-account applicant, as captured by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInput {
    pub applicant_nationality: String,
    pub company_jurisdiction: CompanyJurisdiction,
    pub business_model: BusinessModel,
    /// Free text from the trade licence; matched by keyword.
    pub license_activity: String,
    pub expected_monthly_inflow: MonthlyInflowBand,
    pub source_of_funds: SourceOfFunds,
    pub uae_residency: bool,
    pub previous_rejection: bool,
    #[serde(default)]
    pub incoming_payment_countries: Vec<String>,
}

impl CaseInput {
    pub fn is_non_resident(&self) -> bool {
        !self.uae_residency
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

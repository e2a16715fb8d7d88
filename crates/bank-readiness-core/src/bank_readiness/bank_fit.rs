use log::debug;
use serde::{Deserialize, Serialize};

use super::case::{CaseInput, RiskCategory};
use super::catalog::{BankProfile, RiskTolerance};
use super::risk_lists::is_high_risk_nationality;

/// Every bank starts here before adjustments.
pub const BASE_FIT_SCORE: i32 = 50;

const JURISDICTION_MATCH: i32 = 15;
const JURISDICTION_MISMATCH: i32 = -20;
const MODEL_MATCH: i32 = 15;
const MODEL_CATCH_ALL: i32 = 5;
const MODEL_MISMATCH: i32 = -10;
const ACTIVITY_AVOIDED: i32 = -30;
const ACTIVITY_PREFERRED: i32 = 15;
const NON_RESIDENT_ACCEPTED: i32 = 10;
const NON_RESIDENT_REFUSED: i32 = -25;
const NATIONALITY_ACCEPTED: i32 = 15;
const NATIONALITY_REFUSED: i32 = -30;
const HIGH_RISK_TOLERANT: i32 = 20;
const HIGH_RISK_INTOLERANT: i32 = -15;
const LOW_RISK_CONSERVATIVE: i32 = 10;
const TURNOVER_MET: i32 = 10;
const TURNOVER_MISSED: i32 = -15;
const REJECTION_TOLERANT: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitDimension {
    Jurisdiction,
    BusinessModel,
    Activity,
    Residency,
    NationalityRisk,
    RiskTolerance,
    Turnover,
    RejectionHistory,
}

/// One signed adjustment applied to the base fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitAdjustment {
    pub dimension: FitDimension,
    pub points: i32,
}

fn adjust(out: &mut Vec<FitAdjustment>, dimension: FitDimension, points: i32) {
    out.push(FitAdjustment { dimension, points });
}

/// All adjustments that apply for this bank and case, in table order.
/// Dimensions that do not apply are omitted.
pub fn fit_adjustments(
    bank: &BankProfile,
    input: &CaseInput,
    category: RiskCategory,
) -> Vec<FitAdjustment> {
    let mut out = Vec::new();

    if bank.prefers_jurisdiction(input.company_jurisdiction) {
        adjust(&mut out, FitDimension::Jurisdiction, JURISDICTION_MATCH);
    } else {
        adjust(&mut out, FitDimension::Jurisdiction, JURISDICTION_MISMATCH);
    }

    if bank.prefers_business_model(input.business_model) {
        adjust(&mut out, FitDimension::BusinessModel, MODEL_MATCH);
    } else if bank.has_catch_all_model() {
        adjust(&mut out, FitDimension::BusinessModel, MODEL_CATCH_ALL);
    } else {
        adjust(&mut out, FitDimension::BusinessModel, MODEL_MISMATCH);
    }

    // Avoid wins over preferred when both match.
    if bank.avoided_activity(&input.license_activity).is_some() {
        adjust(&mut out, FitDimension::Activity, ACTIVITY_AVOIDED);
    } else if bank.preferred_activity(&input.license_activity).is_some() {
        adjust(&mut out, FitDimension::Activity, ACTIVITY_PREFERRED);
    }

    if input.is_non_resident() {
        let points = if bank.accepts_non_residents {
            NON_RESIDENT_ACCEPTED
        } else {
            NON_RESIDENT_REFUSED
        };
        adjust(&mut out, FitDimension::Residency, points);
    }

    if is_high_risk_nationality(&input.applicant_nationality) {
        let points = if bank.accepts_high_risk_nationalities {
            NATIONALITY_ACCEPTED
        } else {
            NATIONALITY_REFUSED
        };
        adjust(&mut out, FitDimension::NationalityRisk, points);
    }

    match (category, bank.risk_tolerance) {
        (RiskCategory::High, RiskTolerance::High) => {
            adjust(&mut out, FitDimension::RiskTolerance, HIGH_RISK_TOLERANT)
        }
        (RiskCategory::High, RiskTolerance::Low) => {
            adjust(&mut out, FitDimension::RiskTolerance, HIGH_RISK_INTOLERANT)
        }
        (RiskCategory::Low, RiskTolerance::Low | RiskTolerance::Medium) => {
            adjust(&mut out, FitDimension::RiskTolerance, LOW_RISK_CONSERVATIVE)
        }
        _ => {}
    }

    if bank.meets_turnover(input.expected_monthly_inflow) {
        adjust(&mut out, FitDimension::Turnover, TURNOVER_MET);
    } else {
        adjust(&mut out, FitDimension::Turnover, TURNOVER_MISSED);
    }

    if input.previous_rejection && bank.risk_tolerance == RiskTolerance::High {
        adjust(&mut out, FitDimension::RejectionHistory, REJECTION_TOLERANT);
    }

    out
}

/// Fit of one bank for one case, 0–100.
pub fn score_fit(bank: &BankProfile, input: &CaseInput, category: RiskCategory) -> u32 {
    let raw: i32 = BASE_FIT_SCORE
        + fit_adjustments(bank, input, category)
            .iter()
            .map(|a| a.points)
            .sum::<i32>();
    let score = raw.clamp(0, 100) as u32;
    debug!("fit {}: raw {} clamped {}", bank.code, raw, score);
    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank_readiness::case::{
        BusinessModel, CompanyJurisdiction, MonthlyInflowBand, SourceOfFunds,
    };
    use crate::bank_readiness::catalog::{
        ApprovalWindow, BankTier, BankType, JurisdictionPreference, ProcessingSpeed,
    };

    fn base_bank() -> BankProfile {
        BankProfile {
            name: "Fixture Bank".to_string(),
            code: "FIX".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier2,
            preferred_jurisdictions: vec![JurisdictionPreference::Mainland],
            preferred_business_models: vec![BusinessModel::Consulting],
            preferred_activity_keywords: vec!["consulting".to_string()],
            avoid_activity_keywords: vec!["crypto".to_string()],
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: vec![],
            weaknesses: vec![],
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: ApprovalWindow {
                min_days: 7,
                max_days: 14,
            },
            special_conditions: vec![],
        }
    }

    fn base_input() -> CaseInput {
        CaseInput {
            applicant_nationality: "India".to_string(),
            company_jurisdiction: CompanyJurisdiction::Mainland,
            business_model: BusinessModel::Consulting,
            license_activity: "Management services".to_string(),
            expected_monthly_inflow: MonthlyInflowBand::From100kTo500k,
            source_of_funds: SourceOfFunds::BusinessRevenue,
            uae_residency: true,
            previous_rejection: false,
            incoming_payment_countries: vec![],
        }
    }

    // === Dimensions ===

    #[test]
    fn test_baseline_medium_category() {
        // 50 + 15 (jurisdiction) + 15 (model) + 10 (turnover)
        let score = score_fit(&base_bank(), &base_input(), RiskCategory::Medium);
        assert_eq!(score, 90);
    }

    #[test]
    fn test_low_category_conservative_bonus() {
        let score = score_fit(&base_bank(), &base_input(), RiskCategory::Low);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_jurisdiction_mismatch() {
        let mut input = base_input();
        input.company_jurisdiction = CompanyJurisdiction::Freezone;
        // 50 - 20 + 15 + 10
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 55);
    }

    #[test]
    fn test_jurisdiction_both_matches_unrecognised() {
        let mut bank = base_bank();
        bank.preferred_jurisdictions = vec![JurisdictionPreference::Both];
        let mut input = base_input();
        input.company_jurisdiction = CompanyJurisdiction::Unrecognised;
        assert_eq!(score_fit(&bank, &input, RiskCategory::Medium), 90);
    }

    #[test]
    fn test_business_model_catch_all_and_mismatch() {
        let mut input = base_input();
        input.business_model = BusinessModel::Tech;
        // 50 + 15 - 10 + 10
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 65);

        let mut bank = base_bank();
        bank.preferred_business_models.push(BusinessModel::Other);
        // 50 + 15 + 5 + 10
        assert_eq!(score_fit(&bank, &input, RiskCategory::Medium), 80);
    }

    #[test]
    fn test_avoid_keyword_suppresses_preferred() {
        let mut input = base_input();
        input.license_activity = "Crypto Consulting".to_string();
        let adjustments = fit_adjustments(&base_bank(), &input, RiskCategory::Medium);
        let activity: Vec<i32> = adjustments
            .iter()
            .filter(|a| a.dimension == FitDimension::Activity)
            .map(|a| a.points)
            .collect();
        assert_eq!(activity, vec![-30]);
    }

    #[test]
    fn test_preferred_activity_bonus() {
        let mut input = base_input();
        input.license_activity = "IT Consulting".to_string();
        // 90 + 15 clamps to 100
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 100);
        input.business_model = BusinessModel::Tech;
        // 50 + 15 - 10 + 15 + 10
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 80);
    }

    #[test]
    fn test_residency_adjustments() {
        let mut input = base_input();
        input.uae_residency = false;
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 65);
        let mut bank = base_bank();
        bank.accepts_non_residents = true;
        assert_eq!(score_fit(&bank, &input, RiskCategory::Medium), 100);
    }

    #[test]
    fn test_high_risk_nationality_adjustments() {
        let mut input = base_input();
        input.applicant_nationality = "Afghanistan".to_string();
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 60);
        let mut bank = base_bank();
        bank.accepts_high_risk_nationalities = true;
        assert_eq!(score_fit(&bank, &input, RiskCategory::Medium), 100);
    }

    #[test]
    fn test_medium_nationality_has_no_fit_effect() {
        let mut input = base_input();
        input.applicant_nationality = "Pakistan".to_string();
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 90);
    }

    #[test]
    fn test_risk_tolerance_alignment() {
        let input = base_input();
        let mut bank = base_bank();
        bank.risk_tolerance = RiskTolerance::High;
        // 90 + 20 clamps
        assert_eq!(score_fit(&bank, &input, RiskCategory::High), 100);
        bank.risk_tolerance = RiskTolerance::Low;
        assert_eq!(score_fit(&bank, &input, RiskCategory::High), 75);
        bank.risk_tolerance = RiskTolerance::Medium;
        assert_eq!(score_fit(&bank, &input, RiskCategory::High), 90);
        bank.risk_tolerance = RiskTolerance::High;
        // high tolerance gets no low-category bonus
        assert_eq!(score_fit(&bank, &input, RiskCategory::Low), 90);
    }

    #[test]
    fn test_turnover_below_minimum() {
        let mut input = base_input();
        input.expected_monthly_inflow = MonthlyInflowBand::From50kTo100k;
        // 50 + 15 + 15 - 15
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 65);
        input.expected_monthly_inflow = MonthlyInflowBand::Unrecognised;
        assert_eq!(score_fit(&base_bank(), &input, RiskCategory::Medium), 65);
    }

    #[test]
    fn test_rejection_history_only_for_high_tolerance() {
        let mut input = base_input();
        input.previous_rejection = true;
        input.company_jurisdiction = CompanyJurisdiction::Freezone;
        let mut bank = base_bank();
        // 50 - 20 + 15 + 10
        assert_eq!(score_fit(&bank, &input, RiskCategory::Medium), 55);
        bank.risk_tolerance = RiskTolerance::High;
        assert_eq!(score_fit(&bank, &input, RiskCategory::Medium), 70);
    }

    // === Clamping ===

    #[test]
    fn test_score_clamped_at_zero() {
        let input = CaseInput {
            applicant_nationality: "Iran".to_string(),
            company_jurisdiction: CompanyJurisdiction::Freezone,
            business_model: BusinessModel::Trading,
            license_activity: "crypto".to_string(),
            expected_monthly_inflow: MonthlyInflowBand::Under50k,
            source_of_funds: SourceOfFunds::Gift,
            uae_residency: false,
            previous_rejection: true,
            incoming_payment_countries: vec![],
        };
        let mut bank = base_bank();
        bank.risk_tolerance = RiskTolerance::Low;
        // 50 - 20 - 10 - 30 - 25 - 30 - 15 - 15 = -95
        assert_eq!(score_fit(&bank, &input, RiskCategory::High), 0);
    }
}

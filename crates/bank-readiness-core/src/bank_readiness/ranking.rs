use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::bank_fit::score_fit;
use super::case::{BusinessModel, CaseInput, RiskCategory};
use super::catalog::{BankCatalog, BankProfile, BankType, ProcessingSpeed, RiskTolerance};
use super::risk_lists::{find_keyword, is_high_risk_nationality, SHARIA_DISALLOWED_TERMS};
use super::risk_scoring::RiskAssessmentResult;

pub const RECOMMENDATION_MIN_FIT: u32 = 40;
pub const MAX_RECOMMENDATIONS: usize = 6;
pub const MAX_RECOMMENDATION_TAGS: usize = 5;
const RECOMMENDATION_STRENGTHS: usize = 2;

pub const AVOIDANCE_MAX_FIT: u32 = 40;
pub const MIN_AVOIDANCE_TAGS: usize = 2;
pub const MAX_AVOIDANCES: usize = 5;
pub const MAX_AVOIDANCE_TAGS: usize = 4;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecommendation {
    pub bank_name: String,
    pub bank_code: String,
    pub fit_score: u32,
    pub reason_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAvoidance {
    pub bank_name: String,
    pub bank_code: String,
    pub reason_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankMatches {
    pub recommended: Vec<BankRecommendation>,
    pub avoid: Vec<BankAvoidance>,
}

// ---------------------------------------------------------------------------
// Tag helpers
// ---------------------------------------------------------------------------

/// Append unless blank or already present.
fn push_tag(tags: &mut Vec<String>, tag: impl Into<String>) {
    let tag = tag.into();
    if !tag.trim().is_empty() && !tags.contains(&tag) {
        tags.push(tag);
    }
}

fn recommendation_tags(
    bank: &BankProfile,
    input: &CaseInput,
    category: RiskCategory,
) -> Vec<String> {
    let mut tags = Vec::new();

    if bank.prefers_jurisdiction(input.company_jurisdiction) {
        push_tag(
            &mut tags,
            format!("Accepts {} companies", input.company_jurisdiction),
        );
    }
    if bank.prefers_business_model(input.business_model) {
        push_tag(
            &mut tags,
            format!("Experienced with {} businesses", input.business_model),
        );
    }
    if input.is_non_resident() && bank.accepts_non_residents {
        push_tag(&mut tags, "Accepts non-resident applicants");
    }
    if input.previous_rejection && bank.risk_tolerance == RiskTolerance::High {
        push_tag(&mut tags, "Considers previously rejected applicants");
    }
    if bank.processing_speed == ProcessingSpeed::Fast {
        push_tag(&mut tags, "Fast account processing");
    }
    if category == RiskCategory::High && bank.risk_tolerance == RiskTolerance::High {
        push_tag(&mut tags, "High risk tolerance");
    }
    for strength in bank.strengths.iter().take(RECOMMENDATION_STRENGTHS) {
        push_tag(&mut tags, strength.as_str());
    }
    if let Some(condition) = bank.special_conditions.first() {
        push_tag(&mut tags, condition.as_str());
    }

    tags.truncate(MAX_RECOMMENDATION_TAGS);
    tags
}

fn avoidance_tags(bank: &BankProfile, input: &CaseInput, category: RiskCategory) -> Vec<String> {
    let mut tags = Vec::new();

    if let Some(keyword) = bank.avoided_activity(&input.license_activity) {
        push_tag(&mut tags, format!("Excludes {} activities", keyword));
    }
    if input.is_non_resident() && !bank.accepts_non_residents {
        push_tag(&mut tags, "Does not accept non-residents");
    }
    if is_high_risk_nationality(&input.applicant_nationality)
        && !bank.accepts_high_risk_nationalities
    {
        push_tag(&mut tags, "Restricts high-risk nationalities");
    }
    if category == RiskCategory::High && bank.risk_tolerance == RiskTolerance::Low {
        push_tag(&mut tags, "Low risk tolerance, likely to reject");
    }
    if bank.bank_type == BankType::Islamic
        && find_keyword(&input.license_activity, SHARIA_DISALLOWED_TERMS).is_some()
    {
        push_tag(&mut tags, "Activity not Sharia-compliant");
    }
    for weakness in &bank.weaknesses {
        let lower = weakness.to_lowercase();
        let trading_concern =
            input.business_model == BusinessModel::Trading && lower.contains("trading");
        let strictness_concern = category == RiskCategory::High && lower.contains("strict");
        if trading_concern || strictness_concern {
            push_tag(&mut tags, weakness.as_str());
        }
    }

    tags
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Banks with fit at or above 40, best fit first, at most six.
///
/// Ties keep catalog order.
pub fn recommend_banks(
    catalog: &BankCatalog,
    input: &CaseInput,
    score: u32,
    category: RiskCategory,
) -> Vec<BankRecommendation> {
    let mut recommended: Vec<BankRecommendation> = catalog
        .iter()
        .filter_map(|bank| {
            let fit_score = score_fit(bank, input, category);
            if fit_score < RECOMMENDATION_MIN_FIT {
                return None;
            }
            let reason_tags = recommendation_tags(bank, input, category);
            trace!("recommend {} fit {} tags {:?}", bank.code, fit_score, reason_tags);
            Some(BankRecommendation {
                bank_name: bank.name.clone(),
                bank_code: bank.code.clone(),
                fit_score,
                reason_tags,
            })
        })
        .collect();

    // stable: equal fits stay in catalog order
    recommended.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    recommended.truncate(MAX_RECOMMENDATIONS);

    debug!(
        "recommendations for risk {} ({}): {} bank(s)",
        score,
        category,
        recommended.len()
    );
    recommended
}

/// Banks likely to decline the case: fit below 40 and at least two
/// independent reasons. Reported in catalog order, not by fit.
pub fn banks_to_avoid(
    catalog: &BankCatalog,
    input: &CaseInput,
    score: u32,
    category: RiskCategory,
) -> Vec<BankAvoidance> {
    let avoid: Vec<BankAvoidance> = catalog
        .iter()
        .filter_map(|bank| {
            let fit_score = score_fit(bank, input, category);
            let mut reason_tags = avoidance_tags(bank, input, category);
            trace!("avoid? {} fit {} tags {:?}", bank.code, fit_score, reason_tags);
            if reason_tags.len() < MIN_AVOIDANCE_TAGS || fit_score >= AVOIDANCE_MAX_FIT {
                return None;
            }
            reason_tags.truncate(MAX_AVOIDANCE_TAGS);
            Some(BankAvoidance {
                bank_name: bank.name.clone(),
                bank_code: bank.code.clone(),
                reason_tags,
            })
        })
        .take(MAX_AVOIDANCES)
        .collect();

    debug!(
        "avoidance list for risk {} ({}): {} bank(s)",
        score,
        category,
        avoid.len()
    );
    avoid
}

/// Recommendations and avoidance list for an already-scored case.
pub fn match_banks(
    catalog: &BankCatalog,
    input: &CaseInput,
    risk: &RiskAssessmentResult,
) -> BankMatches {
    BankMatches {
        recommended: recommend_banks(catalog, input, risk.score, risk.category),
        avoid: banks_to_avoid(catalog, input, risk.score, risk.category),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use super::case::{CaseInput, RiskCategory};
use super::catalog::BankCatalog;
use super::guidance;
use super::ranking::{self, BankAvoidance, BankMatches, BankRecommendation};
use super::risk_scoring::{self, RiskAssessmentResult};
use super::validation::validate_case_input;
use crate::{types::*, BankReadinessResult};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Everything the UI renders for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankReadinessReport {
    pub risk: RiskAssessmentResult,
    pub recommended_banks: Vec<BankRecommendation>,
    pub banks_to_avoid: Vec<BankAvoidance>,
    pub required_documents: Vec<String>,
    pub helpful_documents: Vec<String>,
    pub interview_guidance: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessOptions {
    /// Run `validate_case_input` first; its warnings go into the envelope.
    #[serde(default)]
    pub strict: bool,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

fn shared_builtin_catalog() -> Arc<BankCatalog> {
    static BUILTIN: OnceLock<Arc<BankCatalog>> = OnceLock::new();
    BUILTIN
        .get_or_init(|| Arc::new(BankCatalog::builtin()))
        .clone()
}

/// Stateless assessment service over an injected, read-only catalog.
///
/// Cheap to clone; clones share the catalog.
#[derive(Debug, Clone)]
pub struct BankReadinessEngine {
    catalog: Arc<BankCatalog>,
}

impl Default for BankReadinessEngine {
    fn default() -> Self {
        Self::new(shared_builtin_catalog())
    }
}

impl BankReadinessEngine {
    pub fn new(catalog: Arc<BankCatalog>) -> Self {
        BankReadinessEngine { catalog }
    }

    pub fn catalog(&self) -> &BankCatalog {
        &self.catalog
    }

    pub fn assess_risk(&self, input: &CaseInput) -> RiskAssessmentResult {
        risk_scoring::assess_risk(input)
    }

    pub fn recommend(
        &self,
        input: &CaseInput,
        score: u32,
        category: RiskCategory,
    ) -> Vec<BankRecommendation> {
        ranking::recommend_banks(&self.catalog, input, score, category)
    }

    pub fn banks_to_avoid(
        &self,
        input: &CaseInput,
        score: u32,
        category: RiskCategory,
    ) -> Vec<BankAvoidance> {
        ranking::banks_to_avoid(&self.catalog, input, score, category)
    }

    pub fn match_banks(&self, input: &CaseInput, risk: &RiskAssessmentResult) -> BankMatches {
        ranking::match_banks(&self.catalog, input, risk)
    }

    pub fn required_documents(&self, input: &CaseInput, category: RiskCategory) -> Vec<String> {
        guidance::required_documents(input, category)
    }

    pub fn helpful_documents(&self, input: &CaseInput, category: RiskCategory) -> Vec<String> {
        guidance::helpful_documents(input, category)
    }

    pub fn interview_guidance(&self, input: &CaseInput, category: RiskCategory) -> Vec<String> {
        guidance::interview_guidance(input, category)
    }

    /// Run every stage for one case. Infallible.
    pub fn report(&self, input: &CaseInput) -> BankReadinessReport {
        let risk = self.assess_risk(input);
        let BankMatches { recommended, avoid } = self.match_banks(input, &risk);
        let category = risk.category;
        BankReadinessReport {
            required_documents: self.required_documents(input, category),
            helpful_documents: self.helpful_documents(input, category),
            interview_guidance: self.interview_guidance(input, category),
            recommended_banks: recommended,
            banks_to_avoid: avoid,
            risk,
        }
    }

    /// Full report wrapped in the standard output envelope.
    ///
    /// Only fails when `options.strict` is set and validation rejects the input.
    pub fn assess(
        &self,
        input: &CaseInput,
        options: AssessOptions,
    ) -> BankReadinessResult<ComputationOutput<BankReadinessReport>> {
        let start = Instant::now();
        let mut warnings = if options.strict {
            validate_case_input(input)?
        } else {
            Vec::new()
        };

        let report = self.report(input);

        if report.recommended_banks.is_empty() {
            warnings.push(
                "No bank in the catalog reaches the minimum fit score; consider restructuring the application"
                    .to_string(),
            );
        }
        if report.risk.category == RiskCategory::High {
            warnings.push(
                "High-risk profile: expect enhanced due diligence and longer approval times"
                    .to_string(),
            );
        }

        info!(
            "bank readiness: score {} ({}), {} recommended, {} to avoid",
            report.risk.score,
            report.risk.category,
            report.recommended_banks.len(),
            report.banks_to_avoid.len()
        );
        debug!("bank readiness flags: {:?}", report.risk.flags);

        let elapsed = start.elapsed().as_micros() as u64;
        let assumptions = serde_json::json!({
            "catalog_size": self.catalog.len(),
            "category_thresholds": "low <= 25 < medium <= 55 < high",
            "recommendation_min_fit": ranking::RECOMMENDATION_MIN_FIT,
            "avoidance_max_fit": ranking::AVOIDANCE_MAX_FIT,
            "avoidance_order": "catalog order",
            "unrecognised_values": "scored as the lowest-risk branch"
        });

        Ok(with_metadata(
            "Additive nine-factor risk score (0-100) with rule-based bank fit scoring",
            &assumptions,
            warnings,
            elapsed,
            report,
        ))
    }
}

/// One-shot assessment against the built-in UAE catalog.
pub fn assess_bank_readiness(
    input: &CaseInput,
) -> BankReadinessResult<ComputationOutput<BankReadinessReport>> {
    BankReadinessEngine::default().assess(input, AssessOptions::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

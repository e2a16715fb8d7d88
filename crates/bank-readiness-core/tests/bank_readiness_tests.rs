use bank_readiness_core::bank_readiness::bank_fit::score_fit;
use bank_readiness_core::bank_readiness::case::{
    BusinessModel, CaseInput, CompanyJurisdiction, MonthlyInflowBand, RiskCategory, SourceOfFunds,
};
use bank_readiness_core::bank_readiness::catalog::{
    ApprovalWindow, BankCatalog, BankProfile, BankTier, BankType, JurisdictionPreference,
    ProcessingSpeed, RiskTolerance,
};
use bank_readiness_core::bank_readiness::engine::{assess_bank_readiness, BankReadinessEngine};
use bank_readiness_core::bank_readiness::guidance::required_documents;
use bank_readiness_core::bank_readiness::ranking::{banks_to_avoid, recommend_banks};
use bank_readiness_core::bank_readiness::risk_scoring::assess_risk;
use pretty_assertions::assert_eq;

// ===========================================================================
// Fixtures
// ===========================================================================

fn consulting_resident() -> CaseInput {
    // UAE resident, mainland consulting firm with no risk markers
    CaseInput {
        applicant_nationality: "United Kingdom".to_string(),
        company_jurisdiction: CompanyJurisdiction::Mainland,
        business_model: BusinessModel::Consulting,
        license_activity: "IT services".to_string(),
        expected_monthly_inflow: MonthlyInflowBand::From50kTo100k,
        source_of_funds: SourceOfFunds::BusinessRevenue,
        uae_residency: true,
        previous_rejection: false,
        incoming_payment_countries: vec!["United Kingdom".to_string(), "Germany".to_string()],
    }
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|n| it.any(|h| h == n))
}

// ===========================================================================
// Risk scoring scenarios
// ===========================================================================

#[test]
fn test_clean_consulting_case_scores_zero() {
    let result = assess_risk(&consulting_resident());
    assert_eq!(result.score, 0);
    assert_eq!(result.category, RiskCategory::Low);
    assert!(result.flags.is_empty());
}

#[test]
fn test_rejection_plus_high_risk_nationality() {
    let mut input = consulting_resident();
    input.previous_rejection = true;
    input.applicant_nationality = "Afghanistan".to_string();

    let result = assess_risk(&input);
    // 25 (nationality) + 18 (rejection)
    assert_eq!(result.score, 43);
    assert_eq!(result.category, RiskCategory::Medium);
    assert_eq!(
        result.flags,
        vec![
            "High-risk nationality (Afghanistan)".to_string(),
            "Previous bank account rejection".to_string(),
        ]
    );
}

#[test]
fn test_crypto_non_resident_sanctioned_corridor() {
    let mut input = consulting_resident();
    input.license_activity = "cryptocurrency consulting".to_string();
    input.uae_residency = false;
    input.applicant_nationality = "Syria".to_string();
    input.incoming_payment_countries = vec!["Germany".to_string(), "Iran".to_string()];

    let result = assess_risk(&input);
    // 25 + 12 + 20 + 25
    assert_eq!(result.score, 82);
    assert_eq!(result.category, RiskCategory::High);
    assert_eq!(result.flags.len(), 4);
    assert!(result.flags[0].starts_with("High-risk nationality"));
    assert!(result.flags[1].starts_with("Non-resident"));
    assert!(result.flags[2].starts_with("High-risk licence activity"));
    assert!(result.flags[3].contains("(Iran)"));
}

// ===========================================================================
// Fit scoring scenarios
// ===========================================================================

#[test]
fn test_avoid_keyword_costs_exactly_thirty() {
    let catalog = BankCatalog::builtin();
    let enbd = catalog.get("ENBD").unwrap();
    assert!(enbd.avoid_activity_keywords.iter().any(|k| k == "crypto"));

    let mut input = consulting_resident();
    input.expected_monthly_inflow = MonthlyInflowBand::From100kTo500k;
    input.license_activity = "Event management".to_string();
    let neutral = score_fit(enbd, &input, RiskCategory::Medium);

    input.license_activity = "Cryptocurrency Consulting".to_string();
    let crypto = score_fit(enbd, &input, RiskCategory::Medium);

    assert_eq!(neutral, 90);
    assert_eq!(neutral - crypto, 30);
}

// ===========================================================================
// Avoidance gate
// ===========================================================================

fn residency_strict_bank() -> BankProfile {
    BankProfile {
        name: "Residents Only Bank".to_string(),
        code: "ROB".to_string(),
        bank_type: BankType::Conventional,
        tier: BankTier::Tier3,
        preferred_jurisdictions: vec![JurisdictionPreference::Freezone],
        preferred_business_models: vec![BusinessModel::Tech],
        preferred_activity_keywords: vec![],
        avoid_activity_keywords: vec![],
        min_monthly_turnover: MonthlyInflowBand::Under50k,
        accepts_non_residents: false,
        accepts_high_risk_nationalities: false,
        risk_tolerance: RiskTolerance::Medium,
        strengths: vec!["Local expertise".to_string()],
        weaknesses: vec![],
        processing_speed: ProcessingSpeed::Slow,
        typical_approval_days: ApprovalWindow {
            min_days: 20,
            max_days: 40,
        },
        special_conditions: vec![],
    }
}

#[test]
fn test_single_residency_reason_does_not_trigger_avoidance() {
    let catalog = BankCatalog::from_profiles(vec![residency_strict_bank()]).unwrap();
    let mut input = consulting_resident();
    input.uae_residency = false;

    let risk = assess_risk(&input);
    assert_eq!(risk.category, RiskCategory::Low);
    let bank = catalog.get("ROB").unwrap();
    // 50 - 20 - 10 - 25 + 10 (low alignment) + 10 (turnover)
    assert_eq!(score_fit(bank, &input, risk.category), 15);

    let avoid = banks_to_avoid(&catalog, &input, risk.score, risk.category);
    assert!(avoid.is_empty());
}

#[test]
fn test_second_reason_triggers_avoidance() {
    let catalog = BankCatalog::from_profiles(vec![residency_strict_bank()]).unwrap();
    let mut input = consulting_resident();
    input.uae_residency = false;
    input.applicant_nationality = "Yemen".to_string();

    let risk = assess_risk(&input);
    let avoid = banks_to_avoid(&catalog, &input, risk.score, risk.category);
    assert_eq!(avoid.len(), 1);
    assert_eq!(avoid[0].bank_code, "ROB");
    assert_eq!(
        avoid[0].reason_tags,
        vec![
            "Does not accept non-residents".to_string(),
            "Restricts high-risk nationalities".to_string(),
        ]
    );
}

#[test]
fn test_avoidance_is_catalog_ordered_not_fit_sorted() {
    let input = CaseInput {
        applicant_nationality: "Iran".to_string(),
        company_jurisdiction: CompanyJurisdiction::Freezone,
        business_model: BusinessModel::Trading,
        license_activity: "Crypto brokerage".to_string(),
        expected_monthly_inflow: MonthlyInflowBand::Under50k,
        source_of_funds: SourceOfFunds::Gift,
        uae_residency: false,
        previous_rejection: true,
        incoming_payment_countries: vec!["Syria".to_string()],
    };
    let catalog = BankCatalog::builtin();
    let risk = assess_risk(&input);
    let avoid = banks_to_avoid(&catalog, &input, risk.score, risk.category);
    assert_eq!(avoid.len(), 5);

    let positions: Vec<usize> = avoid
        .iter()
        .map(|a| {
            catalog
                .iter()
                .position(|b| b.code == a.bank_code)
                .unwrap()
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    // the first five hostile banks in catalog order
    let codes: Vec<&str> = avoid.iter().map(|a| a.bank_code.as_str()).collect();
    assert_eq!(codes, vec!["ENBD", "FAB", "ADCB", "MASHREQ", "DIB"]);
}

// ===========================================================================
// Guidance
// ===========================================================================

#[test]
fn test_high_required_documents_contain_low_list_in_order() {
    let input = consulting_resident();
    let low = required_documents(&input, RiskCategory::Low);
    let high = required_documents(&input, RiskCategory::High);
    assert!(high.len() > low.len());
    assert!(is_subsequence(&low, &high));
    assert_eq!(&high[..low.len()], &low[..]);
}

// ===========================================================================
// End to end
// ===========================================================================

#[test]
fn test_low_risk_tech_case_ties_keep_catalog_order() {
    let input = CaseInput {
        applicant_nationality: "India".to_string(),
        company_jurisdiction: CompanyJurisdiction::Freezone,
        business_model: BusinessModel::Tech,
        license_activity: "Software development".to_string(),
        expected_monthly_inflow: MonthlyInflowBand::From100kTo500k,
        source_of_funds: SourceOfFunds::BusinessRevenue,
        uae_residency: true,
        previous_rejection: false,
        incoming_payment_countries: vec!["India".to_string()],
    };
    let output = assess_bank_readiness(&input).unwrap();
    let report = &output.result;
    assert_eq!(report.risk.score, 3);
    assert_eq!(report.risk.category, RiskCategory::Low);

    // six banks reach the 100 ceiling; stable sort keeps them in catalog order
    let recs = &report.recommended_banks;
    let codes: Vec<&str> = recs.iter().map(|r| r.bank_code.as_str()).collect();
    assert_eq!(codes, vec!["ENBD", "ADCB", "MASHREQ", "EI", "RAK", "WIO"]);
    assert!(recs.iter().all(|r| r.fit_score == 100));

    assert_eq!(
        recs[0].reason_tags,
        vec![
            "Accepts free zone companies".to_string(),
            "Experienced with tech businesses".to_string(),
            "Largest retail and corporate network in Dubai".to_string(),
            "Strong digital business banking platform".to_string(),
            "Minimum average balance of AED 50,000 for business accounts".to_string(),
        ]
    );
    assert_eq!(
        recs[5].reason_tags,
        vec![
            "Accepts free zone companies".to_string(),
            "Experienced with tech businesses".to_string(),
            "Fast account processing".to_string(),
            "Fully digital onboarding".to_string(),
            "No minimum balance on entry plans".to_string(),
        ]
    );
    assert!(report.banks_to_avoid.is_empty());
    assert!(output.warnings.is_empty());
}

#[test]
fn test_recommendation_caps_hold_on_builtin_catalog() {
    let engine = BankReadinessEngine::default();
    let mut input = consulting_resident();
    input.uae_residency = false;
    input.business_model = BusinessModel::Trading;
    let risk = engine.assess_risk(&input);
    let recs = recommend_banks(engine.catalog(), &input, risk.score, risk.category);
    assert!(recs.len() <= 6);
    for r in &recs {
        assert!(r.fit_score >= 40);
        assert!(r.reason_tags.len() <= 5);
        assert!(r.reason_tags.iter().all(|t| !t.trim().is_empty()));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::case::{BusinessModel, CompanyJurisdiction, MonthlyInflowBand};
use super::risk_lists::find_keyword;
use crate::{BankReadinessError, BankReadinessResult};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankType {
    Conventional,
    Islamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankTier {
    Tier1,
    Tier2,
    Tier3,
    Digital,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionPreference {
    Mainland,
    Freezone,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingSpeed {
    Fast,
    Moderate,
    Slow,
}

// ---------------------------------------------------------------------------
// Bank profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalWindow {
    pub min_days: u32,
    pub max_days: u32,
}

/// One bank in the catalog. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankProfile {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub bank_type: BankType,
    pub tier: BankTier,
    pub preferred_jurisdictions: Vec<JurisdictionPreference>,
    pub preferred_business_models: Vec<BusinessModel>,
    pub preferred_activity_keywords: Vec<String>,
    pub avoid_activity_keywords: Vec<String>,
    pub min_monthly_turnover: MonthlyInflowBand,
    pub accepts_non_residents: bool,
    pub accepts_high_risk_nationalities: bool,
    pub risk_tolerance: RiskTolerance,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub processing_speed: ProcessingSpeed,
    pub typical_approval_days: ApprovalWindow,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_conditions: Vec<String>,
}

impl BankProfile {
    /// True when the bank lists the jurisdiction or takes both.
    pub fn prefers_jurisdiction(&self, jurisdiction: CompanyJurisdiction) -> bool {
        self.preferred_jurisdictions.iter().any(|p| match p {
            JurisdictionPreference::Both => true,
            JurisdictionPreference::Mainland => jurisdiction == CompanyJurisdiction::Mainland,
            JurisdictionPreference::Freezone => jurisdiction == CompanyJurisdiction::Freezone,
        })
    }

    pub fn prefers_business_model(&self, model: BusinessModel) -> bool {
        model != BusinessModel::Unrecognised && self.preferred_business_models.contains(&model)
    }

    /// The bank lists "other" as a catch-all business model.
    pub fn has_catch_all_model(&self) -> bool {
        self.preferred_business_models.contains(&BusinessModel::Other)
    }

    pub fn avoided_activity(&self, activity: &str) -> Option<&str> {
        find_keyword(activity, &self.avoid_activity_keywords)
    }

    pub fn preferred_activity(&self, activity: &str) -> Option<&str> {
        find_keyword(activity, &self.preferred_activity_keywords)
    }

    pub fn meets_turnover(&self, band: MonthlyInflowBand) -> bool {
        band.rank() >= self.min_monthly_turnover.rank()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered, read-only collection of bank profiles keyed by `code`.
///
/// Catalog order matters: the avoidance list is reported in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BankCatalog {
    banks: Vec<BankProfile>,
}

impl BankCatalog {
    /// Build a catalog from caller-supplied profiles, validating codes,
    /// names and approval windows.
    pub fn from_profiles(banks: Vec<BankProfile>) -> BankReadinessResult<Self> {
        if banks.is_empty() {
            return Err(BankReadinessError::InvalidCatalog(
                "Catalog must contain at least one bank".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for bank in &banks {
            let code = bank.code.trim().to_uppercase();
            if code.is_empty() {
                return Err(BankReadinessError::InvalidCatalog(format!(
                    "Bank '{}' has a blank code",
                    bank.name
                )));
            }
            if bank.name.trim().is_empty() {
                return Err(BankReadinessError::InvalidCatalog(format!(
                    "Bank with code '{}' has a blank name",
                    bank.code
                )));
            }
            if !seen.insert(code) {
                return Err(BankReadinessError::InvalidCatalog(format!(
                    "Duplicate bank code '{}'",
                    bank.code
                )));
            }
            if bank.typical_approval_days.min_days > bank.typical_approval_days.max_days {
                return Err(BankReadinessError::InvalidCatalog(format!(
                    "Bank '{}' approval window is inverted ({} > {} days)",
                    bank.code,
                    bank.typical_approval_days.min_days,
                    bank.typical_approval_days.max_days
                )));
            }
        }
        Ok(BankCatalog { banks })
    }

    /// Parse and validate a catalog given as a JSON array of profiles.
    pub fn from_json(json: &str) -> BankReadinessResult<Self> {
        let banks: Vec<BankProfile> = serde_json::from_str(json)?;
        Self::from_profiles(banks)
    }

    pub fn banks(&self) -> &[BankProfile] {
        &self.banks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BankProfile> {
        self.banks.iter()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Look a bank up by code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&BankProfile> {
        let code = code.trim();
        self.banks.iter().find(|b| b.code.eq_ignore_ascii_case(code))
    }

    pub fn require(&self, code: &str) -> BankReadinessResult<&BankProfile> {
        self.get(code)
            .ok_or_else(|| BankReadinessError::UnknownBank(code.to_string()))
    }

    /// The compiled-in UAE bank catalog.
    pub fn builtin() -> Self {
        BankCatalog {
            banks: build_uae_catalog(),
        }
    }
}

impl<'a> IntoIterator for &'a BankCatalog {
    type Item = &'a BankProfile;
    type IntoIter = std::slice::Iter<'a, BankProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.banks.iter()
    }
}

// ---------------------------------------------------------------------------
// Built-in UAE catalog
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn days(min_days: u32, max_days: u32) -> ApprovalWindow {
    ApprovalWindow { min_days, max_days }
}

fn build_uae_catalog() -> Vec<BankProfile> {
    use BusinessModel::*;
    use JurisdictionPreference::{Both, Freezone, Mainland};

    vec![
        BankProfile {
            name: "Emirates NBD".to_string(),
            code: "ENBD".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier1,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Tech],
            preferred_activity_keywords: strings(&[
                "technology",
                "consulting",
                "logistics",
                "retail",
                "e-commerce",
            ]),
            avoid_activity_keywords: strings(&[
                "crypto",
                "forex",
                "gambling",
                "virtual asset",
                "money exchange",
            ]),
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Low,
            strengths: strings(&[
                "Largest retail and corporate network in Dubai",
                "Strong digital business banking platform",
                "Wide trade finance product range",
            ]),
            weaknesses: strings(&[
                "Strict KYC for new-to-bank SMEs",
                "High minimum balance requirements",
            ]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(14, 30),
            special_conditions: strings(&[
                "Minimum average balance of AED 50,000 for business accounts",
            ]),
        },
        BankProfile {
            name: "First Abu Dhabi Bank".to_string(),
            code: "FAB".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier1,
            preferred_jurisdictions: vec![Mainland],
            preferred_business_models: vec![Trading, Service, Consulting],
            preferred_activity_keywords: strings(&[
                "oil",
                "energy",
                "construction",
                "consulting",
                "logistics",
            ]),
            avoid_activity_keywords: strings(&[
                "crypto",
                "gambling",
                "adult",
                "forex",
                "precious metal",
            ]),
            min_monthly_turnover: MonthlyInflowBand::From500kTo1m,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Low,
            strengths: strings(&[
                "Largest bank in the UAE by assets",
                "Strong corporate and government relationships",
                "Extensive international correspondent network",
            ]),
            weaknesses: strings(&[
                "Strict onboarding for start-ups",
                "Prefers established mainland companies",
            ]),
            processing_speed: ProcessingSpeed::Slow,
            typical_approval_days: days(21, 45),
            special_conditions: strings(&[
                "Typically requires audited financials or a strong parent company",
            ]),
        },
        BankProfile {
            name: "Abu Dhabi Commercial Bank".to_string(),
            code: "ADCB".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier1,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Tech],
            preferred_activity_keywords: strings(&[
                "technology",
                "healthcare",
                "education",
                "consulting",
            ]),
            avoid_activity_keywords: strings(&["crypto", "gambling", "weapon", "adult"]),
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: strings(&[
                "Competitive SME banking packages",
                "Good relationship management",
                "Efficient digital onboarding",
            ]),
            weaknesses: strings(&[
                "Limited appetite for general trading companies",
                "Strict documentation requirements",
            ]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(10, 21),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Mashreq Bank".to_string(),
            code: "MASHREQ".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier1,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Tech, Other],
            preferred_activity_keywords: strings(&[
                "trading",
                "import",
                "export",
                "technology",
                "e-commerce",
            ]),
            avoid_activity_keywords: strings(&["crypto", "gambling", "adult", "weapon"]),
            min_monthly_turnover: MonthlyInflowBand::From50kTo100k,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: strings(&[
                "Strong trade finance expertise",
                "Accepts non-resident shareholders case by case",
                "Fast digital account opening",
            ]),
            weaknesses: strings(&[
                "Enhanced checks on trading companies with high-risk corridors",
            ]),
            processing_speed: ProcessingSpeed::Fast,
            typical_approval_days: days(7, 14),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Dubai Islamic Bank".to_string(),
            code: "DIB".to_string(),
            bank_type: BankType::Islamic,
            tier: BankTier::Tier1,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting],
            preferred_activity_keywords: strings(&[
                "real estate",
                "construction",
                "trading",
                "halal",
            ]),
            avoid_activity_keywords: strings(&[
                "alcohol",
                "pork",
                "gambling",
                "crypto",
                "adult",
                "conventional finance",
            ]),
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Low,
            strengths: strings(&[
                "Largest Islamic bank in the UAE",
                "Strong Sharia-compliant trade finance",
                "Wide branch network",
            ]),
            weaknesses: strings(&["Strict Sharia screening of licence activities"]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(14, 30),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Abu Dhabi Islamic Bank".to_string(),
            code: "ADIB".to_string(),
            bank_type: BankType::Islamic,
            tier: BankTier::Tier1,
            preferred_jurisdictions: vec![Mainland],
            preferred_business_models: vec![Service, Consulting, Tech],
            preferred_activity_keywords: strings(&[
                "healthcare",
                "education",
                "technology",
                "consulting",
            ]),
            avoid_activity_keywords: strings(&[
                "alcohol",
                "pork",
                "gambling",
                "entertainment",
                "crypto",
                "tobacco",
            ]),
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Low,
            strengths: strings(&[
                "Strong service-sector relationships in Abu Dhabi",
                "Competitive Islamic financing products",
            ]),
            weaknesses: strings(&["Strict source of funds verification"]),
            processing_speed: ProcessingSpeed::Slow,
            typical_approval_days: days(21, 40),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Emirates Islamic".to_string(),
            code: "EI".to_string(),
            bank_type: BankType::Islamic,
            tier: BankTier::Tier2,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Tech],
            preferred_activity_keywords: strings(&["e-commerce", "retail", "consulting"]),
            avoid_activity_keywords: strings(&[
                "alcohol",
                "pork",
                "gambling",
                "crypto",
                "forex",
            ]),
            min_monthly_turnover: MonthlyInflowBand::From50kTo100k,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: strings(&[
                "Sharia-compliant SME accounts with low entry requirements",
                "Shares the Emirates NBD digital platform",
            ]),
            weaknesses: strings(&["Limited appetite for cash-intensive businesses"]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(10, 21),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "RAKBANK".to_string(),
            code: "RAK".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier2,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Tech, Other],
            preferred_activity_keywords: strings(&[
                "trading",
                "start-up",
                "retail",
                "manufacturing",
            ]),
            avoid_activity_keywords: strings(&["crypto", "gambling", "adult"]),
            min_monthly_turnover: MonthlyInflowBand::Under50k,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: strings(&[
                "SME-focused with low minimum balance",
                "Accepts start-ups",
                "Flexible for free zone companies",
            ]),
            weaknesses: strings(&["Higher fees on some SME packages"]),
            processing_speed: ProcessingSpeed::Fast,
            typical_approval_days: days(7, 14),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Commercial Bank of Dubai".to_string(),
            code: "CBD".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier2,
            preferred_jurisdictions: vec![Mainland],
            preferred_business_models: vec![Trading, Service, Consulting],
            preferred_activity_keywords: strings(&["trading", "manufacturing", "construction"]),
            avoid_activity_keywords: strings(&["crypto", "gambling", "forex"]),
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: strings(&[
                "Personal relationship banking for mainland SMEs",
                "Good trade finance for established traders",
            ]),
            weaknesses: strings(&["Limited free zone appetite"]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(14, 21),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "National Bank of Fujairah".to_string(),
            code: "NBF".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier2,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service],
            preferred_activity_keywords: strings(&[
                "trading",
                "shipping",
                "logistics",
                "gold",
                "precious metal",
            ]),
            avoid_activity_keywords: strings(&["crypto", "gambling", "adult"]),
            min_monthly_turnover: MonthlyInflowBand::From500kTo1m,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: true,
            risk_tolerance: RiskTolerance::High,
            strengths: strings(&[
                "Deep experience with trading and commodities",
                "Considers complex cross-border flows",
            ]),
            weaknesses: strings(&[
                "High turnover expectations",
                "Relationship-driven onboarding",
            ]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(14, 30),
            special_conditions: strings(&[
                "Expects a relationship introduction and a detailed business plan",
            ]),
        },
        BankProfile {
            name: "United Arab Bank".to_string(),
            code: "UAB".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Tier3,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Other],
            preferred_activity_keywords: strings(&["trading", "services"]),
            avoid_activity_keywords: strings(&["crypto", "gambling"]),
            min_monthly_turnover: MonthlyInflowBand::From50kTo100k,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: true,
            risk_tolerance: RiskTolerance::High,
            strengths: strings(&[
                "Higher risk appetite than tier-1 banks",
                "Considers applicants with previous rejections",
            ]),
            weaknesses: strings(&["Smaller branch network", "Higher account fees"]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(10, 21),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Ajman Bank".to_string(),
            code: "AJMAN".to_string(),
            bank_type: BankType::Islamic,
            tier: BankTier::Tier3,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Trading, Service, Consulting, Other],
            preferred_activity_keywords: strings(&["trading", "real estate", "construction"]),
            avoid_activity_keywords: strings(&[
                "alcohol",
                "pork",
                "gambling",
                "entertainment",
                "crypto",
            ]),
            min_monthly_turnover: MonthlyInflowBand::Under50k,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: true,
            risk_tolerance: RiskTolerance::High,
            strengths: strings(&[
                "Flexible onboarding for small businesses",
                "Accepts a wide range of nationalities",
            ]),
            weaknesses: strings(&["Limited digital banking features"]),
            processing_speed: ProcessingSpeed::Moderate,
            typical_approval_days: days(10, 21),
            special_conditions: Vec::new(),
        },
        BankProfile {
            name: "Wio Bank".to_string(),
            code: "WIO".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Digital,
            preferred_jurisdictions: vec![Freezone],
            preferred_business_models: vec![Service, Consulting, Tech],
            preferred_activity_keywords: strings(&[
                "technology",
                "software",
                "e-commerce",
                "consulting",
                "marketing",
                "design",
            ]),
            avoid_activity_keywords: strings(&[
                "crypto",
                "forex",
                "gambling",
                "general trading",
                "money exchange",
                "gold",
            ]),
            min_monthly_turnover: MonthlyInflowBand::Under50k,
            accepts_non_residents: false,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::Medium,
            strengths: strings(&[
                "Fully digital onboarding",
                "No minimum balance on entry plans",
                "Built for freelancers and start-ups",
            ]),
            weaknesses: strings(&[
                "Not suited to trading companies",
                "Limited cash handling",
            ]),
            processing_speed: ProcessingSpeed::Fast,
            typical_approval_days: days(2, 7),
            special_conditions: strings(&["Requires UAE residency for the account signatory"]),
        },
        BankProfile {
            name: "Zand Bank".to_string(),
            code: "ZAND".to_string(),
            bank_type: BankType::Conventional,
            tier: BankTier::Digital,
            preferred_jurisdictions: vec![Both],
            preferred_business_models: vec![Tech, Service, Consulting, Other],
            preferred_activity_keywords: strings(&[
                "technology",
                "fintech",
                "virtual asset",
                "blockchain",
                "crypto",
            ]),
            avoid_activity_keywords: strings(&["gambling", "adult", "weapon"]),
            min_monthly_turnover: MonthlyInflowBand::From100kTo500k,
            accepts_non_residents: true,
            accepts_high_risk_nationalities: false,
            risk_tolerance: RiskTolerance::High,
            strengths: strings(&[
                "Open to regulated virtual asset businesses",
                "Digital-first corporate banking",
            ]),
            weaknesses: strings(&[
                "Strict compliance review for crypto-linked flows",
                "Higher minimum balance",
            ]),
            processing_speed: ProcessingSpeed::Fast,
            typical_approval_days: days(5, 14),
            special_conditions: strings(&[
                "Virtual asset businesses need a VARA or equivalent licence",
            ]),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // === Built-in catalog ===

    #[test]
    fn test_builtin_catalog_validates() {
        let builtin = BankCatalog::builtin();
        let revalidated = BankCatalog::from_profiles(builtin.banks().to_vec()).unwrap();
        assert_eq!(revalidated, builtin);
        assert_eq!(builtin.len(), 14);
    }

    #[test]
    fn test_builtin_has_both_bank_types() {
        let catalog = BankCatalog::builtin();
        assert!(catalog.iter().any(|b| b.bank_type == BankType::Islamic));
        assert!(catalog.iter().any(|b| b.bank_type == BankType::Conventional));
        assert!(catalog.iter().any(|b| b.tier == BankTier::Digital));
    }

    #[test]
    fn test_builtin_has_no_blank_descriptive_text() {
        for bank in &BankCatalog::builtin() {
            let texts = bank
                .strengths
                .iter()
                .chain(&bank.weaknesses)
                .chain(&bank.special_conditions);
            for text in texts {
                assert!(!text.trim().is_empty(), "blank text on {}", bank.code);
            }
        }
    }

    // === Lookup ===

    #[test]
    fn test_get_is_case_insensitive() {
        let catalog = BankCatalog::builtin();
        assert_eq!(catalog.get("enbd").unwrap().name, "Emirates NBD");
        assert_eq!(catalog.get(" Wio ").unwrap().code, "WIO");
        assert!(catalog.get("HSBC").is_none());
    }

    #[test]
    fn test_require_unknown_bank_error() {
        let catalog = BankCatalog::builtin();
        let err = catalog.require("NOPE").unwrap_err();
        assert!(matches!(err, BankReadinessError::UnknownBank(code) if code == "NOPE"));
    }

    // === Validation ===

    fn sample_bank(code: &str) -> BankProfile {
        let mut bank = BankCatalog::builtin().banks()[0].clone();
        bank.code = code.to_string();
        bank
    }

    #[test]
    fn test_empty_catalog_error() {
        let err = BankCatalog::from_profiles(vec![]).unwrap_err();
        assert!(matches!(err, BankReadinessError::InvalidCatalog(_)));
    }

    #[test]
    fn test_duplicate_code_error() {
        let err =
            BankCatalog::from_profiles(vec![sample_bank("AAA"), sample_bank("aaa")]).unwrap_err();
        assert!(matches!(err, BankReadinessError::InvalidCatalog(msg) if msg.contains("Duplicate")));
    }

    #[test]
    fn test_blank_code_error() {
        let err = BankCatalog::from_profiles(vec![sample_bank("  ")]).unwrap_err();
        assert!(matches!(err, BankReadinessError::InvalidCatalog(_)));
    }

    #[test]
    fn test_inverted_approval_window_error() {
        let mut bank = sample_bank("AAA");
        bank.typical_approval_days = days(30, 10);
        let err = BankCatalog::from_profiles(vec![bank]).unwrap_err();
        assert!(matches!(err, BankReadinessError::InvalidCatalog(msg) if msg.contains("inverted")));
    }

    #[test]
    fn test_from_json_round_trip_keeps_order() {
        let catalog = BankCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed = BankCatalog::from_json(&json).unwrap();
        let codes: Vec<&str> = parsed.iter().map(|b| b.code.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_from_json_malformed_error() {
        let err = BankCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, BankReadinessError::SerializationError(_)));
    }

    // === Profile predicates ===

    #[test]
    fn test_both_preference_matches_any_jurisdiction() {
        let catalog = BankCatalog::builtin();
        let enbd = catalog.get("ENBD").unwrap();
        assert!(enbd.prefers_jurisdiction(CompanyJurisdiction::Mainland));
        assert!(enbd.prefers_jurisdiction(CompanyJurisdiction::Freezone));
        assert!(enbd.prefers_jurisdiction(CompanyJurisdiction::Unrecognised));

        let fab = catalog.get("FAB").unwrap();
        assert!(fab.prefers_jurisdiction(CompanyJurisdiction::Mainland));
        assert!(!fab.prefers_jurisdiction(CompanyJurisdiction::Freezone));
        assert!(!fab.prefers_jurisdiction(CompanyJurisdiction::Unrecognised));
    }

    #[test]
    fn test_unrecognised_model_never_preferred() {
        let mut bank = sample_bank("AAA");
        bank.preferred_business_models.push(BusinessModel::Unrecognised);
        assert!(!bank.prefers_business_model(BusinessModel::Unrecognised));
    }

    #[test]
    fn test_turnover_rank_comparison() {
        let catalog = BankCatalog::builtin();
        let fab = catalog.get("FAB").unwrap();
        assert!(!fab.meets_turnover(MonthlyInflowBand::From100kTo500k));
        assert!(fab.meets_turnover(MonthlyInflowBand::From500kTo1m));
        assert!(fab.meets_turnover(MonthlyInflowBand::Over5m));
        assert!(!fab.meets_turnover(MonthlyInflowBand::Unrecognised));
    }
}

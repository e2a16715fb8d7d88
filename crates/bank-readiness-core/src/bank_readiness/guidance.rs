//! Document checklists and interview preparation.
//!
//! Each list is a base block followed by gated blocks in a fixed order:
//! elevated risk, high risk, trading model, high-risk nationality, previous
//! rejection, free zone, payment-country risk. The order is rendered as a
//! numbered checklist, so it is part of the contract.

use super::case::{BusinessModel, CaseInput, CompanyJurisdiction, RiskCategory};
use super::risk_lists::{has_payment_country_risk, is_high_risk_nationality};

/// One optional block of checklist items.
struct Block {
    applies: fn(&CaseInput, RiskCategory) -> bool,
    items: &'static [&'static str],
}

fn elevated(_: &CaseInput, category: RiskCategory) -> bool {
    category != RiskCategory::Low
}

fn high(_: &CaseInput, category: RiskCategory) -> bool {
    category == RiskCategory::High
}

fn trading(input: &CaseInput, _: RiskCategory) -> bool {
    input.business_model == BusinessModel::Trading
}

fn risky_nationality(input: &CaseInput, _: RiskCategory) -> bool {
    is_high_risk_nationality(&input.applicant_nationality)
}

fn rejected_before(input: &CaseInput, _: RiskCategory) -> bool {
    input.previous_rejection
}

fn freezone(input: &CaseInput, _: RiskCategory) -> bool {
    input.company_jurisdiction == CompanyJurisdiction::Freezone
}

fn risky_payment_countries(input: &CaseInput, _: RiskCategory) -> bool {
    has_payment_country_risk(&input.incoming_payment_countries)
}

fn build(base: &[&str], blocks: &[Block], input: &CaseInput, category: RiskCategory) -> Vec<String> {
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    for block in blocks {
        if (block.applies)(input, category) {
            out.extend(block.items.iter().map(|s| s.to_string()));
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Required documents
// ---------------------------------------------------------------------------

const REQUIRED_BASE: &[&str] = &[
    "Trade licence copy",
    "Memorandum / Articles of Association",
    "Certificate of incorporation or registration",
    "Passport copies of all shareholders and signatories",
    "UAE visa and Emirates ID copies (residents)",
    "Proof of residential address for all shareholders",
    "Business plan with expected account activity",
    "Personal bank statements for the last 6 months",
];

const REQUIRED_BLOCKS: &[Block] = &[
    Block {
        applies: elevated,
        items: &[
            "Source of funds evidence for the initial deposit",
            "Detailed CV of each shareholder",
        ],
    },
    Block {
        applies: high,
        items: &[
            "Enhanced due diligence questionnaire",
            "Source of wealth declaration with supporting evidence",
            "Reference letter from an existing bank",
        ],
    },
    Block {
        applies: trading,
        items: &[
            "Sample supplier and customer invoices or contracts",
            "Description of trade flows (goods, origin and destination)",
        ],
    },
    Block {
        applies: risky_nationality,
        items: &["Police clearance / good conduct certificate"],
    },
    Block {
        applies: rejected_before,
        items: &["Written explanation of the previous account rejection"],
    },
    Block {
        applies: freezone,
        items: &[
            "Free zone establishment card",
            "Free zone office lease or flexi-desk agreement",
        ],
    },
    Block {
        applies: risky_payment_countries,
        items: &["Sanctions compliance declaration covering counterparty countries"],
    },
];

/// Documents the bank will ask for before opening the account.
pub fn required_documents(input: &CaseInput, category: RiskCategory) -> Vec<String> {
    build(REQUIRED_BASE, REQUIRED_BLOCKS, input, category)
}

// ---------------------------------------------------------------------------
// Helpful documents
// ---------------------------------------------------------------------------

const HELPFUL_BASE: &[&str] = &[
    "Company profile or website",
    "Office tenancy contract (Ejari)",
    "Audited financial statements, if available",
];

const HELPFUL_BLOCKS: &[Block] = &[
    Block {
        applies: elevated,
        items: &["Reference letters from key clients"],
    },
    Block {
        applies: high,
        items: &[
            "Tax residency certificate",
            "Statements from existing business accounts abroad",
        ],
    },
    Block {
        applies: trading,
        items: &["Shipping and customs documents for recent shipments"],
    },
    Block {
        applies: risky_nationality,
        items: &["Proof of long-term residence outside the home country"],
    },
    Block {
        applies: rejected_before,
        items: &["Evidence that issues behind the earlier rejection are resolved"],
    },
    Block {
        applies: freezone,
        items: &["Free zone authority no-objection letter"],
    },
    Block {
        applies: risky_payment_countries,
        items: &["KYC files for counterparties in listed countries"],
    },
];

/// Optional documents that strengthen the application.
pub fn helpful_documents(input: &CaseInput, category: RiskCategory) -> Vec<String> {
    build(HELPFUL_BASE, HELPFUL_BLOCKS, input, category)
}

// ---------------------------------------------------------------------------
// Interview guidance
// ---------------------------------------------------------------------------

const INTERVIEW_BASE: &[&str] = &[
    "Explain the business model and main revenue streams in plain terms",
    "Name your main clients and suppliers and where they are based",
    "State the expected monthly turnover and transaction volumes consistently with the application",
    "Bring original passports and Emirates IDs for all signatories",
];

const INTERVIEW_BLOCKS: &[Block] = &[
    Block {
        applies: elevated,
        items: &["Be ready to walk through the source of the initial deposit"],
    },
    Block {
        applies: high,
        items: &[
            "Expect an enhanced due diligence interview with compliance",
            "Prepare documentary evidence for every figure you quote",
        ],
    },
    Block {
        applies: trading,
        items: &["Describe the goods traded, their origin, and how they are shipped"],
    },
    Block {
        applies: risky_nationality,
        items: &["Explain your ties to the UAE and any residence history elsewhere"],
    },
    Block {
        applies: rejected_before,
        items: &["Disclose the previous rejection openly and explain what has changed"],
    },
    Block {
        applies: freezone,
        items: &["Explain where the free zone company operates and serves its clients"],
    },
    Block {
        applies: risky_payment_countries,
        items: &["Explain payment flows from higher-risk countries and your sanctions checks"],
    },
];

/// Preparation tips for the bank's onboarding interview.
pub fn interview_guidance(input: &CaseInput, category: RiskCategory) -> Vec<String> {
    build(INTERVIEW_BASE, INTERVIEW_BLOCKS, input, category)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Optional strict checks run in front of the engine.
//!
//! The engine accepts anything and degrades to its most permissive branch.
//! Callers that want to reject incomplete intake forms run this first.

use super::case::{BusinessModel, CaseInput, CompanyJurisdiction, MonthlyInflowBand, SourceOfFunds};
use crate::{BankReadinessError, BankReadinessResult};

/// Reject blank required text and report unrecognised values as warnings.
pub fn validate_case_input(input: &CaseInput) -> BankReadinessResult<Vec<String>> {
    if input.applicant_nationality.trim().is_empty() {
        return Err(BankReadinessError::InvalidInput {
            field: "applicant_nationality".to_string(),
            reason: "Applicant nationality must not be empty".to_string(),
        });
    }
    if input.license_activity.trim().is_empty() {
        return Err(BankReadinessError::InvalidInput {
            field: "license_activity".to_string(),
            reason: "Licence activity must not be empty".to_string(),
        });
    }

    let mut warnings = Vec::new();

    if input.company_jurisdiction == CompanyJurisdiction::Unrecognised {
        warnings.push(
            "company_jurisdiction not recognised; treated as matching no bank preference"
                .to_string(),
        );
    }
    if input.business_model == BusinessModel::Unrecognised {
        warnings.push(
            "business_model not recognised; scored as zero risk and no preferred match"
                .to_string(),
        );
    }
    if input.expected_monthly_inflow == MonthlyInflowBand::Unrecognised {
        warnings.push(
            "expected_monthly_inflow not recognised; ranked below every bank minimum".to_string(),
        );
    }
    if input.source_of_funds == SourceOfFunds::Unrecognised {
        warnings.push("source_of_funds not recognised; scored as zero risk".to_string());
    }
    let blank_countries = input
        .incoming_payment_countries
        .iter()
        .filter(|c| c.trim().is_empty())
        .count();
    if blank_countries > 0 {
        warnings.push(format!(
            "{} blank incoming payment country entr{} ignored",
            blank_countries,
            if blank_countries == 1 { "y" } else { "ies" }
        ));
    }

    Ok(warnings)
}

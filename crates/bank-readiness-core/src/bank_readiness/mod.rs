//! Bank readiness assessment for UAE company bank-account applications.
//!
//! Pipeline: case input → risk score and category → per-bank fit score →
//! recommendation and avoidance lists. Document and interview guidance is
//! derived from the case input and risk category alone.
//!
//! Every function here is pure over `(CaseInput, BankCatalog)`. Nothing is
//! rejected: unrecognised values fall through to the zero-point branch.

pub mod catalog;
pub mod risk_lists;
pub mod case;
pub mod validation;

#[cfg(feature = "risk_scoring")]
pub mod risk_scoring;

#[cfg(feature = "matching")]
pub mod bank_fit;

#[cfg(feature = "matching")]
pub mod ranking;

#[cfg(feature = "guidance")]
pub mod guidance;

#[cfg(feature = "full")]
pub mod engine;

use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use bank_readiness_core::bank_readiness::case::MonthlyInflowBand;
use bank_readiness_core::bank_readiness::catalog::{BankTier, BankType};

use super::{load_engine, parse_choice, GlobalOptions};

/// Arguments for listing the catalog
#[derive(Args)]
pub struct BanksArgs {
    /// Only banks of this tier (tier1, tier2, tier3, digital)
    #[arg(long)]
    pub tier: Option<String>,

    /// Only Islamic banks
    #[arg(long)]
    pub islamic: bool,
}

pub fn run_banks(args: BanksArgs, opts: &GlobalOptions) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = load_engine(opts)?;
    let tier: Option<BankTier> = match args.tier {
        Some(ref raw) => Some(parse_choice("tier", raw)?),
        None => None,
    };

    let rows: Vec<Value> = engine
        .catalog()
        .iter()
        .filter(|b| tier.map_or(true, |t| b.tier == t))
        .filter(|b| !args.islamic || b.bank_type == BankType::Islamic)
        .map(|b| {
            json!({
                "code": b.code,
                "name": b.name,
                "type": b.bank_type,
                "tier": b.tier,
                "processing_speed": b.processing_speed,
                "risk_tolerance": b.risk_tolerance,
                "approval_days": format!(
                    "{}-{}",
                    b.typical_approval_days.min_days, b.typical_approval_days.max_days
                ),
            })
        })
        .collect();
    Ok(Value::Array(rows))
}

/// Arguments for a single bank profile
#[derive(Args)]
pub struct BankArgs {
    /// Bank code, e.g. ENBD (case-insensitive)
    #[arg(long)]
    pub code: String,
}

pub fn run_bank(args: BankArgs, opts: &GlobalOptions) -> Result<Value, Box<dyn std::error::Error>> {
    let engine = load_engine(opts)?;
    let profile = engine.catalog().require(&args.code)?;
    Ok(serde_json::to_value(profile)?)
}

/// Arguments for inflow band classification
#[derive(Args)]
pub struct ClassifyInflowArgs {
    /// Expected monthly inflow in AED
    #[arg(long)]
    pub amount: Decimal,
}

pub fn run_classify_inflow(args: ClassifyInflowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let band = MonthlyInflowBand::from_amount(args.amount)?;
    Ok(json!({
        "amount": args.amount,
        "band": band,
        "label": band.label(),
        "floor_aed": band.floor_aed(),
    }))
}

//! Text rendering for the shell. All rounding and currency formatting lives here.

use std::fmt::Write as _;

use crate::ledger::TradeRecord;
use crate::report::RiskReport;
use crate::types::{AssetClass, Region, TradeInputs};
use crate::utils::{fmt_ratio, fmt_usd};

pub fn inputs(t: &TradeInputs) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Trade     : {} {} strike {:.2} exp {}",
        t.symbol, t.option_type, t.strike_price, t.expiration_date
    );
    let _ = writeln!(
        out,
        "Underlying: {:.2}  IV {:.2}%  rate {:.2}%",
        t.stock_price,
        t.volatility * 100.0,
        t.interest_rate * 100.0
    );
    let _ = writeln!(
        out,
        "Prices    : entry {:.2}  stop {:.2}  target {:.2}  x{} contracts",
        t.entry_price, t.stop_loss_price, t.take_profit_price, t.contracts
    );
    let _ = writeln!(
        out,
        "Account   : capital {}  risk {:.1}%  {} / {}",
        fmt_usd(t.total_capital),
        t.risk_tolerance * 100.0,
        t.asset_class,
        t.region
    );
    out
}

pub fn report(t: &TradeInputs, r: &RiskReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Option Greeks");
    for (name, v) in r.greeks.entries() {
        let _ = writeln!(out, "  {name:<6} {v:>10.4}");
    }

    let _ = writeln!(out, "\nRisk Metrics");
    let _ = writeln!(
        out,
        "  Risk-to-Reward Ratio : {}",
        fmt_ratio(r.risk_reward_ratio)
    );
    let _ = writeln!(
        out,
        "  Position Size        : {:.2} contracts ({})",
        r.position_size_contracts,
        fmt_usd(r.position_size_dollars)
    );
    let _ = writeln!(out, "  Max Loss per Trade   : {}", fmt_usd(r.max_risk_dollars));
    let _ = writeln!(out, "  Time to Expiry       : {:.2} years", r.time_to_expiry_years);

    let _ = writeln!(out, "\nRisk Notes");
    let _ = writeln!(
        out,
        "  Market risk    : monitor economic data and news for {}.",
        t.symbol
    );
    let _ = writeln!(out, "  Liquidity risk : ensure {} options are liquid.", t.symbol);
    let _ = writeln!(
        out,
        "  Volatility risk: volatility at {:.2}% may impact premiums.",
        t.volatility * 100.0
    );
    let _ = writeln!(
        out,
        "  Time decay risk: theta indicates daily loss of {} per contract.",
        fmt_usd((r.greeks.theta * 100.0).abs())
    );

    let _ = writeln!(out, "\nPortfolio Allocation");
    for slice in allocation(t, r) {
        let _ = writeln!(
            out,
            "  {:<14} {:>12}  {:<11} {}",
            slice.asset,
            fmt_usd(slice.amount),
            slice.asset_class,
            slice.region
        );
    }

    let _ = writeln!(
        out,
        "\nTips: limit risk to {:.1}% of capital per trade; exits at stop {} / target {}.",
        t.risk_tolerance * 100.0,
        fmt_usd(t.stop_loss_price),
        fmt_usd(t.take_profit_price)
    );
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub asset: String,
    pub amount: f64,
    pub asset_class: AssetClass,
    pub region: Region,
}

/// This trade next to two placeholder holdings at 30 % and 20 % of capital.
pub fn allocation(t: &TradeInputs, r: &RiskReport) -> [AllocationSlice; 3] {
    [
        AllocationSlice {
            asset: t.symbol.clone(),
            amount: r.position_size_dollars,
            asset_class: t.asset_class,
            region: t.region,
        },
        AllocationSlice {
            asset: "Other Asset 1".into(),
            amount: t.total_capital * 0.3,
            asset_class: AssetClass::Stocks,
            region: Region::Us,
        },
        AllocationSlice {
            asset: "Other Asset 2".into(),
            amount: t.total_capital * 0.2,
            asset_class: AssetClass::Commodities,
            region: Region::Global,
        },
    ]
}

pub fn history(records: &[TradeRecord]) -> String {
    if records.is_empty() {
        return "No saved trades.\n".into();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<36}  {:<6} {:<4} {:>9} {:>8} {:>12} {:>6}  {}",
        "Trade ID", "Asset", "Type", "Strike", "Entry", "Size", "R:R", "Saved"
    );
    for rec in records {
        let tr = &rec.trade;
        let _ = writeln!(
            out,
            "{:<36}  {:<6} {:<4} {:>9.2} {:>8.2} {:>12} {:>6}  {}",
            rec.trade_id,
            tr.asset,
            tr.option_type,
            tr.strike_price,
            tr.entry_price,
            fmt_usd(tr.position_size),
            fmt_ratio(tr.risk_reward_ratio),
            rec.saved_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    out
}

pub fn history_json(records: &[TradeRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub const HELP: &str = "\
Commands:
  set <field> <value>   fields: type symbol stock strike expiry(YYYY-MM-DD|+N) iv% rate%
                                entry stop target contracts capital risk% class region
  show                  current inputs
  eval                  evaluate and print the risk report
  save                  evaluate and record the trade in this session's history
  history [json]        saved trades, oldest first
  new                   end this session and start a fresh one
  quit
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{tests::snapshot, TradeLedger};
    use crate::report::evaluate;
    use crate::types::tests::sample_inputs;

    #[test]
    fn report_shows_two_decimal_metrics() {
        let t = sample_inputs();
        let r = evaluate(&t).unwrap();
        let s = report(&t, &r);
        assert!(s.contains("Risk-to-Reward Ratio : 1.50"));
        assert!(s.contains("Position Size        : 0.10 contracts ($50.00)"));
        assert!(s.contains("Max Loss per Trade   : $100.00"));
        assert!(s.contains("Time to Expiry       : 0.20 years"));
        assert!(s.contains("volatility at 20.00%"));
        assert!(s.contains("daily loss of $0.20 per contract"));
    }

    #[test]
    fn allocation_uses_fixed_shares_of_capital() {
        let t = sample_inputs();
        let r = evaluate(&t).unwrap();
        let a = allocation(&t, &r);
        assert_eq!(a[0].asset, "SPY");
        assert_eq!(a[0].amount, 50.0);
        assert_eq!(a[1].amount, 3_000.0);
        assert_eq!(a[2].amount, 2_000.0);
    }

    #[test]
    fn allocation_tags_each_slice_with_class_and_region() {
        let t = TradeInputs {
            asset_class: AssetClass::Etfs,
            region: Region::Asia,
            ..sample_inputs()
        };
        let r = evaluate(&t).unwrap();
        let a = allocation(&t, &r);
        assert_eq!((a[0].asset_class, a[0].region), (AssetClass::Etfs, Region::Asia));
        assert_eq!((a[1].asset_class, a[1].region), (AssetClass::Stocks, Region::Us));
        assert_eq!(
            (a[2].asset_class, a[2].region),
            (AssetClass::Commodities, Region::Global)
        );

        let s = report(&t, &r);
        assert!(s.contains("ETFs"));
        assert!(s.contains("Asia"));
        assert!(s.contains("Commodities"));
    }

    #[test]
    fn empty_history() {
        assert_eq!(history(&[]), "No saved trades.\n");
    }

    #[test]
    fn history_table_and_json() {
        let mut l = TradeLedger::new();
        let id = l.append(snapshot("SPY", 100.0));
        l.append(crate::ledger::TradeSnapshot {
            risk_reward_ratio: f64::INFINITY,
            ..snapshot("QQQ", 400.0)
        });

        let table = history(l.list());
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains(&id.to_string()));
        assert!(table.contains("inf"));

        let json = history_json(l.list()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["trade_id"], id.to_string());
        assert_eq!(v[0]["asset"], "SPY");
        assert_eq!(v[0]["risk_reward_ratio"], 1.5);
        assert_eq!(v[1]["risk_reward_ratio"], "inf");
        assert_eq!(v[1]["option_type"], "Call");
    }
}

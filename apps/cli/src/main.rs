#![deny(warnings)]

//! Headless CLI: load a scenario, run the contract market for some months
//! and print the offers on the table.

use anyhow::{Context, Result};
use market_core::Contract;
use market_runtime::{embedded_scenario, MarketRuntime, Scenario};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Args {
    scenario: Option<PathBuf>,
    months: u32,
    seed: u64,
    save: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args {
        scenario: None,
        months: 1,
        seed: 42,
        save: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => args.scenario = it.next().map(PathBuf::from),
            "--months" => {
                if let Some(months) = it.next().and_then(|s| s.parse().ok()) {
                    args.months = months;
                }
            }
            "--seed" => {
                if let Some(seed) = it.next().and_then(|s| s.parse().ok()) {
                    args.seed = seed;
                }
            }
            "--save" => args.save = it.next().map(PathBuf::from),
            other => warn!(arg = other, "ignoring unknown argument"),
        }
    }
    args
}

fn load_scenario(path: Option<&PathBuf>) -> Result<Scenario> {
    match path {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display())),
        None => Ok(Scenario::from_yaml_str(embedded_scenario("demo")?)?),
    }
}

fn terms_columns(c: &Contract) -> (String, String, String) {
    let t = &c.terms;
    let salvage = if t.salvage_exchange {
        format!("{}% exch", t.salvage_pct)
    } else {
        format!("{}%", t.salvage_pct)
    };
    let support = if t.battle_loss_comp > 0 {
        format!("BLC {}%", t.battle_loss_comp)
    } else {
        format!("{}%", t.straight_support)
    };
    (format!("{:?}", t.command), salvage, support)
}

fn print_offers(offers: &[Contract]) {
    println!(
        "{:<6} {:<44} {:<18} {:<10} {:>3}  {:<11} {:<9} {:<8} {:>5} {:>7} {:>5}  note",
        "id",
        "contract",
        "mission",
        "start",
        "mo",
        "command",
        "salvage",
        "support",
        "trans",
        "pay",
        "parts"
    );
    for c in offers {
        let (command, salvage, support) = terms_columns(c);
        let note = match (c.parent, c.merc_subcontract) {
            (Some(parent), _) => format!("sub of {parent}"),
            (None, true) => "via mercenary".to_string(),
            (None, false) => String::new(),
        };
        println!(
            "{:<6} {:<44} {:<18} {:<10} {:>3}  {:<11} {:<9} {:<8} {:>4}% {:>7} {:>5}  {}",
            c.id.to_string(),
            c.name,
            c.mission.to_string(),
            c.start.to_string(),
            c.length_months,
            command,
            salvage,
            support,
            c.terms.transport_comp,
            c.payment_multiplier.to_string(),
            c.parts_availability,
            note
        );
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args();
    info!(scenario = ?args.scenario, months = args.months, seed = args.seed, "starting CLI");

    let scenario = load_scenario(args.scenario.as_ref())?;
    let mut runtime = MarketRuntime::new(scenario, args.seed)?;
    runtime.start_campaign();
    let summary = runtime.run_months(args.months)?;

    print_offers(runtime.state().offers());
    println!(
        "market {} | {} | seed {} | months {} | passes {} | \
         generated {} | on market {} | last id {}",
        env!("GIT_SHA"),
        summary.date,
        args.seed,
        summary.months,
        summary.passes,
        summary.offers_generated,
        summary.offers_on_market,
        summary.last_id
    );

    if let Some(path) = &args.save {
        persistence::save_market(path, runtime.state())
            .with_context(|| format!("saving market to {}", path.display()))?;
        info!(path = %path.display(), "market snapshot saved");
    }
    Ok(())
}

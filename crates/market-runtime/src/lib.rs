#![deny(warnings)]

//! Seeded runtime that drives the contract market over a scenario world.
//!
//! The campaign calendar advances one day at a time; the market pass fires on
//! the first of each month. All rolls come from one `ChaCha8Rng`, so a seed
//! and a scenario fully determine a run.

mod scenario;
mod world;

pub use scenario::{embedded_scenario, FactionSpec, Scenario, ScenarioError, SystemSpec, WarSpec};
pub use world::{ScenarioWorld, DAYS_PER_JUMP, JUMP_RANGE_LY};

use chrono::NaiveDate;
use market_core::collab::MarketObserver;
use market_core::{Campaign, Clause, Contract, ContractId};
use market_gen::{AtbMonthly, MarketContext, MarketError, MarketState, StandardValuation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error(transparent)]
    Market(#[from] MarketError),
    #[error("calendar cannot advance past {0}")]
    CalendarOverflow(NaiveDate),
}

/// Outcome of [`MarketRuntime::run_months`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSummary {
    pub months: u32,
    /// Generation passes fired during the run.
    pub passes: u32,
    /// Offers put on the market during the run, summed over passes.
    pub offers_generated: usize,
    pub offers_on_market: usize,
    pub last_id: u64,
    pub date: NaiveDate,
}

/// Observer that tallies refreshed offers and keeps report lines.
#[derive(Debug, Default)]
struct MarketLog {
    offers_generated: usize,
    reports: Vec<String>,
}

impl MarketObserver for MarketLog {
    fn offers_changed(&mut self, offers: &[Contract]) {
        self.offers_generated += offers.len();
    }

    fn report(&mut self, line: &str) {
        debug!(line, "market report");
        self.reports.push(line.to_string());
    }
}

pub struct MarketRuntime {
    world: ScenarioWorld,
    campaign: Campaign,
    rules: AtbMonthly,
    valuation: StandardValuation,
    state: MarketState,
    rng: ChaCha8Rng,
    log: MarketLog,
    passes: u32,
}

// Free function so callers can borrow the market state and rng mutably
// alongside the context.
fn context<'a>(
    world: &'a ScenarioWorld,
    campaign: &'a Campaign,
    rules: &'a AtbMonthly,
    valuation: &'a StandardValuation,
) -> MarketContext<'a> {
    MarketContext {
        campaign,
        factions: world,
        systems: world,
        relations: world,
        jumps: world,
        personnel: world,
        valuation,
        rules,
    }
}

impl MarketRuntime {
    pub fn new(scenario: Scenario, seed: u64) -> Result<Self, RuntimeError> {
        scenario.validate()?;
        let world = ScenarioWorld::new(&scenario);
        // New offers must not collide with contracts already in the campaign.
        let last_id = scenario
            .campaign
            .active_contracts
            .iter()
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0);
        info!(
            seed,
            factions = scenario.factions.len(),
            systems = scenario.systems.len(),
            date = %scenario.campaign.date,
            "market runtime initialised"
        );
        Ok(Self {
            world,
            campaign: scenario.campaign,
            rules: scenario.rules,
            valuation: StandardValuation,
            state: MarketState::from_parts(Vec::new(), last_id, BTreeMap::new()),
            rng: ChaCha8Rng::seed_from_u64(seed),
            log: MarketLog::default(),
            passes: 0,
        })
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn state(&self) -> &MarketState {
        &self.state
    }

    pub fn world(&self) -> &ScenarioWorld {
        &self.world
    }

    /// Report lines emitted by every pass so far.
    pub fn reports(&self) -> &[String] {
        &self.log.reports
    }

    fn run_pass(&mut self, campaign_start: bool) -> bool {
        let ctx = context(&self.world, &self.campaign, &self.rules, &self.valuation);
        let fired = self
            .state
            .generate_offers(&ctx, &mut self.rng, &mut self.log, campaign_start);
        if fired {
            self.passes += 1;
        }
        fired
    }

    /// Force the opening market regardless of the day of the month.
    pub fn start_campaign(&mut self) {
        self.run_pass(true);
    }

    /// Move the calendar one day, retire finished contracts and run the
    /// market pass. Returns whether the pass fired.
    ///
    /// Follow-ups to retired contracts are offered after the pass so the
    /// monthly purge does not take them straight off the market.
    pub fn advance_day(&mut self) -> Result<bool, RuntimeError> {
        let today = self.campaign.date;
        self.campaign.date = today
            .succ_opt()
            .ok_or(RuntimeError::CalendarOverflow(today))?;
        let finished = self.retire_finished();
        let fired = self.run_pass(false);
        for origin in finished.iter().filter(|c| c.mission.has_followup()) {
            let ctx = context(&self.world, &self.campaign, &self.rules, &self.valuation);
            if let Some(id) = self.state.add_followup(&ctx, &mut self.rng, origin) {
                info!(%id, origin = %origin.id, "follow-up offered");
            }
        }
        Ok(fired)
    }

    fn retire_finished(&mut self) -> Vec<Contract> {
        let today = self.campaign.date;
        let (running, finished) = std::mem::take(&mut self.campaign.active_contracts)
            .into_iter()
            .partition(|c| c.end_date() > today);
        self.campaign.active_contracts = running;
        for c in &finished {
            info!(id = %c.id, name = %c.name, "contract completed");
        }
        finished
    }

    /// Advance until `months` more passes have fired.
    pub fn run_months(&mut self, months: u32) -> Result<RuntimeSummary, RuntimeError> {
        let passes_before = self.passes;
        let generated_before = self.log.offers_generated;
        while self.passes - passes_before < months {
            self.advance_day()?;
        }
        Ok(RuntimeSummary {
            months,
            passes: self.passes - passes_before,
            offers_generated: self.log.offers_generated - generated_before,
            offers_on_market: self.state.offers().len(),
            last_id: self.state.last_id(),
            date: self.campaign.date,
        })
    }

    pub fn reroll_clause(
        &mut self,
        id: ContractId,
        clause: Clause,
    ) -> Result<&Contract, RuntimeError> {
        let ctx = context(&self.world, &self.campaign, &self.rules, &self.valuation);
        Ok(self.state.reroll_clause(&ctx, id, clause, &mut self.rng)?)
    }

    /// Take an offer off the market and add it to the campaign's contracts.
    pub fn accept_offer(&mut self, id: ContractId) -> Result<(), RuntimeError> {
        let contract = self
            .state
            .remove_offer(id)
            .ok_or(MarketError::UnknownContract(id))?;
        info!(%id, name = %contract.name, "offer accepted");
        self.campaign.active_contracts.push(contract);
        Ok(())
    }

    /// Offer a follow-up to an active contract or a current offer. `Ok(None)`
    /// when the origin already has one.
    pub fn add_followup(&mut self, origin: ContractId) -> Result<Option<ContractId>, RuntimeError> {
        let origin = self
            .campaign
            .active_contract(origin)
            .or_else(|| self.state.offer(origin))
            .cloned()
            .ok_or(MarketError::UnknownContract(origin))?;
        let ctx = context(&self.world, &self.campaign, &self.rules, &self.valuation);
        Ok(self.state.add_followup(&ctx, &mut self.rng, &origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use market_core::{validate_contract, validate_subcontract, MissionType};
    use proptest::prelude::*;

    fn demo(seed: u64) -> MarketRuntime {
        let text = embedded_scenario("demo").unwrap();
        MarketRuntime::new(Scenario::from_yaml_str(text).unwrap(), seed).unwrap()
    }

    #[test]
    fn same_seed_same_market() {
        let mut a = demo(7);
        let mut b = demo(7);
        a.start_campaign();
        b.start_campaign();
        let sa = a.run_months(6).unwrap();
        let sb = b.run_months(6).unwrap();
        assert_eq!(sa, sb);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn opening_market_has_fresh_ids() {
        let mut rt = demo(42);
        rt.start_campaign();
        let offers = rt.state().offers();
        assert!(offers.len() >= 2, "{} offers", offers.len());
        assert!(offers.iter().all(|c| c.id.0 > 2));
        assert_eq!(rt.reports(), ["Contract market updated"]);
    }

    #[test]
    fn months_end_on_the_first() {
        let mut rt = demo(3);
        let summary = rt.run_months(3).unwrap();
        assert_eq!(summary.passes, 3);
        assert_eq!(summary.date, NaiveDate::from_ymd_opt(3025, 4, 1).unwrap());
        assert_eq!(summary.date.day(), 1);
        assert_eq!(summary.offers_on_market, rt.state().offers().len());
        assert_eq!(rt.reports().len(), 3);
    }

    #[test]
    fn finished_contracts_retire() {
        let mut rt = demo(5);
        assert_eq!(rt.campaign().active_contracts.len(), 2);
        rt.run_months(2).unwrap();
        assert_eq!(rt.campaign().active_contracts.len(), 1);
        let followup = *rt.state().followups().get(&ContractId(2)).unwrap();
        let offer = rt.state().offer(followup).unwrap();
        assert_eq!(offer.mission, MissionType::GarrisonDuty);
        assert_eq!(offer.employer.as_str(), "TC");

        rt.run_months(9).unwrap();
        assert_eq!(rt.campaign().active_contracts.len(), 0);
        // garrison duty has no follow-up
        assert!(rt.state().followups().is_empty());
    }

    #[test]
    fn concluded_raid_is_followed_up() {
        let mut scenario = Scenario::from_yaml_str(embedded_scenario("demo").unwrap()).unwrap();
        scenario.campaign.active_contracts.truncate(1);
        let raid = &mut scenario.campaign.active_contracts[0];
        raid.mission = MissionType::ReconRaid;
        raid.start = NaiveDate::from_ymd_opt(3025, 1, 1).unwrap();
        raid.length_months = 1;
        let mut rt = MarketRuntime::new(scenario, 17).unwrap();
        rt.run_months(1).unwrap();

        let ended = NaiveDate::from_ymd_opt(3025, 2, 1).unwrap();
        assert_eq!(rt.campaign().date, ended);
        assert!(rt.campaign().active_contracts.is_empty());
        let followup = *rt.state().followups().get(&ContractId(1)).unwrap();
        let offer = rt.state().offer(followup).unwrap();
        assert_eq!(offer.mission, MissionType::PlanetaryAssault);
        assert_eq!(offer.employer.as_str(), "FS");
        assert_eq!(offer.start, ended);
        assert!(validate_contract(offer).is_ok());

        // the link is dropped with the offer at the next monthly refresh
        rt.run_months(1).unwrap();
        assert!(rt.state().followups().is_empty());
    }

    #[test]
    fn accept_and_followup() {
        let mut rt = demo(11);
        rt.start_campaign();
        let id = rt.state().offers()[0].id;
        rt.accept_offer(id).unwrap();
        assert!(rt.state().offer(id).is_none());
        assert!(rt.campaign().active_contract(id).is_some());
        assert!(matches!(
            rt.accept_offer(id),
            Err(RuntimeError::Market(MarketError::UnknownContract(_)))
        ));

        let followup = rt.add_followup(ContractId(1)).unwrap().unwrap();
        let offer = rt.state().offer(followup).unwrap();
        assert_eq!(offer.employer.as_str(), "FS");
        assert_eq!(offer.start, NaiveDate::from_ymd_opt(3025, 12, 1).unwrap());
        assert_eq!(rt.add_followup(ContractId(1)).unwrap(), None);
        assert!(rt.add_followup(ContractId(9999)).is_err());
    }

    #[test]
    fn reroll_through_runtime() {
        let mut rt = demo(13);
        rt.start_campaign();
        let id = rt.state().offers()[0].id;
        let rerolled = rt.reroll_clause(id, Clause::Transport).unwrap();
        assert_eq!(rerolled.negotiation.rerolls(Clause::Transport), 1);
        assert!(validate_contract(rerolled).is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn runs_keep_market_valid(seed in any::<u64>(), months in 1u32..=4) {
            let mut rt = demo(seed);
            rt.start_campaign();
            rt.run_months(months).unwrap();
            let campaign = rt.campaign();
            for offer in rt.state().offers() {
                prop_assert!(offer.id.0 > 2);
                match offer.parent {
                    Some(parent) => {
                        let parent = campaign.active_contract(parent).unwrap();
                        prop_assert_eq!(parent.mission, MissionType::GarrisonDuty);
                        prop_assert!(validate_subcontract(parent, offer).is_ok());
                    }
                    None => prop_assert!(validate_contract(offer).is_ok()),
                }
            }
        }
    }
}

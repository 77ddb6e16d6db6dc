//! The market orchestrator: offer collection, id allocation and the
//! per-period generation pass.

use crate::factory;
use crate::{clauses, MarketContext, MarketError};
use chrono::Datelike;
use market_core::collab::MarketObserver;
use market_core::{Clause, Contract, ContractId, Dice, FactionCode, MissionType};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Radius used to decide whether the current location is a backwater.
pub const BACKWATER_RADIUS_LY: f64 = 30.0;

/// Offers on the market at least once at campaign start.
const CAMPAIGN_START_OFFERS: i32 = 2;

/// Roll needed on 2d6 to spawn a subcontract in a free slot.
const SUBCONTRACT_TARGET: i32 = 10;

/// Active offers plus the bookkeeping that must survive between passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketState {
    offers: Vec<Contract>,
    last_id: u64,
    followups: BTreeMap<ContractId, ContractId>,
}

impl MarketState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a market from persisted parts.
    ///
    /// The id counter is raised above every restored offer and follow-up
    /// links whose follow-up is no longer on the market are dropped.
    pub fn from_parts(
        offers: Vec<Contract>,
        last_id: u64,
        mut followups: BTreeMap<ContractId, ContractId>,
    ) -> Self {
        let last_id = offers.iter().map(|c| c.id.0).fold(last_id, u64::max);
        followups.retain(|_, followup| offers.iter().any(|c| c.id == *followup));
        Self {
            offers,
            last_id,
            followups,
        }
    }

    pub fn offers(&self) -> &[Contract] {
        &self.offers
    }

    pub fn offer(&self, id: ContractId) -> Option<&Contract> {
        self.offers.iter().find(|c| c.id == id)
    }

    /// Highest id handed out so far.
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Origin contract id to follow-up offer id.
    pub fn followups(&self) -> &BTreeMap<ContractId, ContractId> {
        &self.followups
    }

    pub(crate) fn allocate_id(&mut self) -> ContractId {
        self.last_id += 1;
        ContractId(self.last_id)
    }

    /// Take an offer off the market, e.g. once it has been accepted.
    pub fn remove_offer(&mut self, id: ContractId) -> Option<Contract> {
        let index = self.offers.iter().position(|c| c.id == id)?;
        self.followups.retain(|_, followup| *followup != id);
        Some(self.offers.remove(index))
    }

    fn purge(&mut self) -> usize {
        let old = std::mem::take(&mut self.offers);
        self.followups.clear();
        old.len()
    }

    /// Run the generation pass. Fires on the first day of each month, or on
    /// any day when `campaign_start` is set; returns whether it ran.
    pub fn generate_offers(
        &mut self,
        ctx: &MarketContext<'_>,
        dice: &mut dyn Dice,
        observer: &mut dyn MarketObserver,
        campaign_start: bool,
    ) -> bool {
        let campaign = ctx.campaign;
        if campaign.date.day() != 1 && !campaign_start {
            return false;
        }
        let purged = self.purge();

        for parent in &campaign.active_contracts {
            if parent.mission == MissionType::GarrisonDuty && !parent.is_subcontract() {
                self.spawn_subcontracts(ctx, dice, parent);
            }
        }

        let mut count = offer_count(ctx, dice);
        self.add_capital_offer(ctx, dice);
        if campaign_start {
            count = count.max(CAMPAIGN_START_OFFERS);
        }
        for _ in 0..count {
            if let Some(contract) = factory::generate_offer(ctx, self, dice) {
                self.offers.push(contract);
            }
        }

        info!(
            date = %campaign.date,
            purged,
            offers = self.offers.len(),
            "contract market refreshed"
        );
        observer.offers_changed(&self.offers);
        if campaign.options.report_on_refresh {
            observer.report("Contract market updated");
        }
        true
    }

    fn spawn_subcontracts(
        &mut self,
        ctx: &MarketContext<'_>,
        dice: &mut dyn Dice,
        parent: &Contract,
    ) {
        let existing = self
            .offers
            .iter()
            .filter(|c| c.parent == Some(parent.id))
            .count() as i32;
        let deficit = ctx.unit_rating_mod() - 1 - existing;
        for _ in 0..deficit.max(0) {
            if dice.two_d6() < SUBCONTRACT_TARGET {
                continue;
            }
            let sub = factory::generate_subcontract(ctx, self, dice, parent);
            if sub.end_date() < parent.end_date() {
                self.offers.push(sub);
            } else {
                debug!(id = %sub.id, parent = %parent.id, "subcontract outlives parent, discarded");
            }
        }
    }

    /// One guaranteed offer from a present employer whose capital is the
    /// current location. The next faction is tried only if generation for the
    /// previous one produced nothing.
    fn add_capital_offer(&mut self, ctx: &MarketContext<'_>, dice: &mut dyn Dice) {
        let campaign = ctx.campaign;
        let present = ctx.local_factions();
        let employers = ctx.relations.employer_codes();
        for code in present.iter().filter(|f| employers.contains(*f)) {
            let capital = ctx.factions.starting_planet(code, campaign.date);
            if capital.as_ref() != Some(&campaign.location) {
                continue;
            }
            if let Some(contract) = factory::generate(
                ctx,
                self,
                dice,
                Some(code.clone()),
                campaign.options.generation_retries,
            ) {
                debug!(id = %contract.id, employer = %code, "capital offer");
                self.offers.push(contract);
                break;
            }
        }
    }

    /// Offer a follow-up to `origin`. At most one follow-up is linked to a
    /// contract at any time.
    pub fn add_followup(
        &mut self,
        ctx: &MarketContext<'_>,
        dice: &mut dyn Dice,
        origin: &Contract,
    ) -> Option<ContractId> {
        if self.followups.contains_key(&origin.id) {
            return None;
        }
        let contract = factory::generate_followup(ctx, self, dice, origin);
        let id = contract.id;
        self.offers.push(contract);
        self.followups.insert(origin.id, id);
        Some(id)
    }

    /// Reroll one clause of an offer with its stored modifier.
    pub fn reroll_clause(
        &mut self,
        ctx: &MarketContext<'_>,
        id: ContractId,
        clause: Clause,
        dice: &mut dyn Dice,
    ) -> Result<&Contract, MarketError> {
        let offer = self
            .offers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(MarketError::UnknownContract(id))?;
        if let Some(limit) = ctx.campaign.options.max_clause_rerolls {
            if offer.negotiation.rerolls(clause) >= limit {
                return Err(MarketError::RerollLimit { id, clause, limit });
            }
        }
        clauses::roll_clause(ctx, offer, clause, dice);
        offer.negotiation.record_reroll(clause);
        debug!(%id, %clause, rerolls = offer.negotiation.rerolls(clause), "clause rerolled");
        Ok(offer)
    }
}

/// No faction present, only periphery factions present, or a single
/// periphery faction with no other faction nearby.
fn is_backwater(ctx: &MarketContext<'_>, present: &[FactionCode]) -> bool {
    if present.iter().all(|f| ctx.is_periphery(f)) {
        return true;
    }
    let [only] = present else {
        return false;
    };
    if !ctx.is_periphery(only) {
        return false;
    }
    let campaign = ctx.campaign;
    !ctx.systems
        .systems_within(&campaign.location, BACKWATER_RADIUS_LY)
        .iter()
        .flat_map(|s| ctx.systems.factions_at(s, campaign.date))
        .any(|f| &f != only)
}

/// Number of regular offers for this pass, before the campaign-start floor.
pub fn offer_count(ctx: &MarketContext<'_>, dice: &mut dyn Dice) -> i32 {
    let campaign = ctx.campaign;
    let present = ctx.local_factions();
    let mut count = ctx.rules.base_offer_count(dice.d6(), ctx.unit_rating_mod());
    if !present.iter().any(|f| ctx.is_power_or_clan(f)) {
        count -= 1;
    }
    if is_backwater(ctx, &present) {
        count -= 1;
    }
    if campaign.is_mercenary_or_pirate() {
        if ctx.systems.is_hiring_hall(&campaign.location, campaign.date) {
            count += 1;
            if is_backwater(ctx, &present) {
                count += 1;
            }
        }
    } else {
        count += 1;
    }
    count
}

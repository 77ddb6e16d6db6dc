#![deny(warnings)]

//! Persistence layer: market snapshots.
//!
//! A snapshot holds the offers on the market, the id counter, the
//! negotiation state of every offer and the follow-up links. Negotiation
//! state and links are keyed by the contract id as a string so the JSON form
//! stays a plain object. Loading is tolerant: malformed records are skipped,
//! logged and counted in a [`LoadReport`] instead of failing the load.

use anyhow::{bail, Context, Result};
use market_core::{ClauseModifiers, Contract, ContractId};
use market_gen::MarketState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// Serializable image of a [`MarketState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Highest contract id handed out.
    pub last_id: u64,
    pub offers: Vec<Contract>,
    /// Contract id to stored clause modifiers and reroll counters.
    #[serde(default)]
    pub modifiers: BTreeMap<String, ClauseModifiers>,
    /// Originating contract id to follow-up offer id.
    #[serde(default)]
    pub followups: BTreeMap<String, String>,
}

/// What a restore had to skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub restored: usize,
    pub unparsable_ids: usize,
    pub duplicate_offers: usize,
    pub orphan_modifiers: usize,
    pub orphan_followups: usize,
}

impl LoadReport {
    pub fn skipped(&self) -> usize {
        self.unparsable_ids + self.duplicate_offers + self.orphan_modifiers + self.orphan_followups
    }

    pub fn is_clean(&self) -> bool {
        self.skipped() == 0
    }
}

fn parse_id(key: &str) -> Option<ContractId> {
    key.trim().trim_start_matches('#').parse().ok().map(ContractId)
}

impl MarketSnapshot {
    pub fn capture(state: &MarketState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            last_id: state.last_id(),
            offers: state.offers().to_vec(),
            modifiers: state
                .offers()
                .iter()
                .map(|c| (c.id.0.to_string(), c.negotiation))
                .collect(),
            followups: state
                .followups()
                .iter()
                .map(|(origin, followup)| (origin.0.to_string(), followup.0.to_string()))
                .collect(),
        }
    }

    /// Rebuild the market. Offers without a modifier record negotiate from
    /// zero modifiers; the id counter is raised above every restored id.
    pub fn restore(self) -> (MarketState, LoadReport) {
        let mut report = LoadReport::default();

        let mut modifiers = BTreeMap::new();
        for (key, mods) in self.modifiers {
            match parse_id(&key) {
                Some(id) => {
                    modifiers.insert(id, mods);
                }
                None => {
                    warn!(key = %key, "skipping modifier record with unparsable id");
                    report.unparsable_ids += 1;
                }
            }
        }

        let mut offers: Vec<Contract> = Vec::with_capacity(self.offers.len());
        for mut offer in self.offers {
            if offers.iter().any(|c| c.id == offer.id) {
                warn!(id = %offer.id, "skipping duplicate offer");
                report.duplicate_offers += 1;
                continue;
            }
            offer.negotiation = modifiers.remove(&offer.id).unwrap_or_default();
            offers.push(offer);
        }
        for id in modifiers.keys() {
            warn!(%id, "skipping modifier record for unknown contract");
            report.orphan_modifiers += 1;
        }

        let mut followups = BTreeMap::new();
        for (origin, followup) in self.followups {
            let (Some(origin_id), Some(followup_id)) = (parse_id(&origin), parse_id(&followup))
            else {
                warn!(
                    origin = %origin,
                    followup = %followup,
                    "skipping follow-up link with unparsable id"
                );
                report.unparsable_ids += 1;
                continue;
            };
            if !offers.iter().any(|c| c.id == followup_id) {
                warn!(
                    origin = %origin_id,
                    followup = %followup_id,
                    "skipping follow-up link to unknown offer"
                );
                report.orphan_followups += 1;
                continue;
            }
            followups.insert(origin_id, followup_id);
        }

        report.restored = offers.len();
        (
            MarketState::from_parts(offers, self.last_id, followups),
            report,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(text).context("parsing market snapshot")?;
        snapshot.check_version()
    }

    pub fn to_bincode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bincode(bytes: &[u8]) -> Result<Self> {
        let snapshot: Self = bincode::deserialize(bytes).context("decoding market snapshot")?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self> {
        if self.version > SNAPSHOT_VERSION {
            bail!(
                "snapshot version {} is newer than supported version {}",
                self.version,
                SNAPSHOT_VERSION
            );
        }
        Ok(self)
    }
}

/// On-disk encoding, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Json,
    Bincode,
}

impl Codec {
    /// `.bin` and `.bincode` files are bincode, everything else JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") | Some("bincode") => Codec::Bincode,
            _ => Codec::Json,
        }
    }
}

/// Write a snapshot of `state`, creating parent directories as needed.
pub fn save_market(path: impl AsRef<Path>, state: &MarketState) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let snapshot = MarketSnapshot::capture(state);
    let bytes = match Codec::for_path(path) {
        Codec::Json => snapshot.to_json()?.into_bytes(),
        Codec::Bincode => snapshot.to_bincode()?,
    };
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), offers = state.offers().len(), "market saved");
    Ok(())
}

pub fn load_market(path: impl AsRef<Path>) -> Result<(MarketState, LoadReport)> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot = match Codec::for_path(path) {
        Codec::Json => {
            let text = String::from_utf8(bytes).context("snapshot is not UTF-8")?;
            MarketSnapshot::from_json(&text)?
        }
        Codec::Bincode => MarketSnapshot::from_bincode(&bytes)?,
    };
    let (state, report) = snapshot.restore();
    info!(
        path = %path.display(),
        restored = report.restored,
        skipped = report.skipped(),
        "market loaded"
    );
    Ok((state, report))
}

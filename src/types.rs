use soroban_sdk::{contracttype, Address};

use crate::error::VaultError;

pub const DAY_IN_SECONDS: u64 = 86_400;
/// Default cycle: a fixed 30-day span.
pub const DEFAULT_CYCLE_LENGTH: u64 = 30 * DAY_IN_SECONDS;
/// Default deposit window: days 1-7 of each cycle.
pub const DEFAULT_WINDOW_LENGTH: u64 = 7 * DAY_IN_SECONDS;
/// Default early-withdrawal penalty: 10%.
pub const DEFAULT_PENALTY_BPS: u32 = 1_000;
pub const BPS_DENOMINATOR: i128 = 10_000;

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days
pub(crate) const QUEST_LIFETIME_THRESHOLD: u32 = 518_400;
pub(crate) const QUEST_BUMP_AMOUNT: u32 = 1_036_800; // ~60 days

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin,
    TokenAddress,
    Settings,
    QuestCount,
    Ranking,
    RetainedPenalties,
    Quest(u32),
    OwnerQuests(Address),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestStatus {
    Active = 0,
    Withdrawn = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quest {
    pub owner: Address,
    /// Amount collected per cycle, in the token's smallest unit.
    pub target_amount: i128,
    pub duration_cycles: u32,
    pub streak: u32,
    pub last_deposit_cycle: Option<u64>,
    pub total_deposited: i128,
    pub creation_timestamp: u64,
    pub status: QuestStatus,
}

impl Quest {
    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }
}

/// Clock and penalty parameters, fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultSettings {
    pub epoch_start: u64,
    pub cycle_length: u64,
    pub window_length: u64,
    pub penalty_bps: u32,
}

impl VaultSettings {
    /// 30-day cycles with a 7-day window and a 10% penalty, counted from `epoch_start`.
    pub fn monthly(epoch_start: u64) -> Self {
        VaultSettings {
            epoch_start,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            window_length: DEFAULT_WINDOW_LENGTH,
            penalty_bps: DEFAULT_PENALTY_BPS,
        }
    }

    pub fn validate(&self) -> Result<(), VaultError> {
        if self.cycle_length == 0
            || self.window_length == 0
            || self.window_length > self.cycle_length
            || self.penalty_bps as i128 > BPS_DENOMINATOR
        {
            return Err(VaultError::InvalidParameter);
        }
        Ok(())
    }
}

/// Position of a timestamp on the deposit clock.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CycleInfo {
    pub cycle: u64,
    pub offset: u64,
    pub in_window: bool,
}

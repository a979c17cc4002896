//! The three upgrade layers: permanent (gold), per-run (silver) and the
//! equipped passive item.

pub mod ledger;
pub mod orbs;
pub mod permanent;
pub mod run;

pub use ledger::{UpgradeKind, UpgradeLedger};
pub use orbs::{find_orb, orb_or_default, OrbAbility, PassiveItem, ORB_CATALOG};
pub use permanent::{PermanentLedger, PermanentUpgrade, UpgradeCategory};
pub use run::{RunLedger, RunUpgrade};

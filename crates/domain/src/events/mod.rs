//! Domain events and the append-only battle ledger.

mod history;

pub use history::{BattleSummary, History, TurnRecord};

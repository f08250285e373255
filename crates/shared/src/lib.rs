//! Rumble Shared - the wire contracts a transport layer implements against.
//!
//! The engine's operations (create battle, execute action, read battle,
//! read history, list, delete) are transport-agnostic; this crate freezes
//! their request/response shapes and the error-code mapping so any HTTP or
//! WebSocket layer can be bolted on without touching the engine.

pub mod requests;
pub mod responses;

pub use requests::{CreateDuelRequest, CreateTeamBattleRequest, SubmitActionRequest};
pub use responses::{
    ActionOption, BattleMode, BattleView, ErrorBody, ErrorCode, FighterView, HistoryView,
    MeterView, SideView, SubstitutionView, TurnReport, TurnView, VictoryView,
};

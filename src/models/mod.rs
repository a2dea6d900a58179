pub mod action;
pub mod event;
pub mod ledger;
pub mod overtime;
pub mod pause;
pub mod time_off;

pub mod accumulator;
pub mod codec;
pub mod ledger;
pub mod log;
pub mod session;

pub mod duration;
pub mod form;
pub mod ledger_state;
pub mod store_op;

pub use duration::{ClockTime, Duration};
pub use form::{FormInputs, Overview};
pub use ledger_state::LedgerState;
pub use store_op::StoreOp;

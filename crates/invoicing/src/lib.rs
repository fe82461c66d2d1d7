//! Invoice lifecycle state machine.
//!
//! An [`Invoice`] forwards every action (pay, cancel, refund) to its current
//! state. The state consults the transition table and either moves the invoice
//! to its next state or rejects the action with a human-readable notice. All
//! logic is deterministic and in-memory (no IO, no storage).

pub mod invoice;
pub mod number;
pub mod outcome;
pub mod state;

pub use invoice::{Invoice, InvoiceSnapshot, TransitionRecord};
pub use number::InvoiceNumber;
pub use outcome::{Outcome, Rejection, RejectionReason};
pub use state::{InvoiceAction, InvoiceState, InvoiceStatus, transition};

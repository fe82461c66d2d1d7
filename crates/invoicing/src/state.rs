//! Invoice states, actions and the transition table between them.
//!
//! | State     | Pay    | Cancel    | Refund   |
//! |-----------|--------|-----------|----------|
//! | Pending   | Paid   | Cancelled | rejected |
//! | Paid      | rejected | rejected | Refunded |
//! | Cancelled | rejected | rejected | rejected |
//! | Refunded  | rejected | rejected | rejected |
//!
//! A paid invoice cannot be cancelled: cancelling only reverses an unpaid
//! invoice, and refunding is the only reversal of a paid one.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use invoicefsm_core::DomainError;

use crate::invoice::Invoice;
use crate::outcome::{Outcome, Rejection, RejectionReason};

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
    Refunded,
}

impl InvoiceStatus {
    /// State every new invoice starts in.
    pub const INITIAL: Self = Self::Pending;

    pub const ALL: [Self; 4] = [Self::Pending, Self::Paid, Self::Cancelled, Self::Refunded];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }

    /// Actions that lead to a transition from this state.
    pub fn available_actions(self) -> Vec<InvoiceAction> {
        InvoiceAction::ALL
            .into_iter()
            .filter(|action| transition(self, *action).is_ok())
            .collect()
    }

    /// Terminal states have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self.available_actions().is_empty()
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" | "unpaid" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "refunded" => Ok(Self::Refunded),
            other => Err(DomainError::validation(format!(
                "unknown invoice status: {other:?}"
            ))),
        }
    }
}

/// Action a caller can request on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceAction {
    Pay,
    Cancel,
    Refund,
}

impl InvoiceAction {
    pub const ALL: [Self; 3] = [Self::Pay, Self::Cancel, Self::Refund];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pay => "pay",
            Self::Cancel => "cancel",
            Self::Refund => "refund",
        }
    }

    /// Past participle used in notices ("cannot be paid").
    pub fn past_participle(self) -> &'static str {
        match self {
            Self::Pay => "paid",
            Self::Cancel => "cancelled",
            Self::Refund => "refunded",
        }
    }
}

impl core::fmt::Display for InvoiceAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pay" => Ok(Self::Pay),
            "cancel" => Ok(Self::Cancel),
            "refund" => Ok(Self::Refund),
            other => Err(DomainError::validation(format!(
                "unknown invoice action: {other:?}"
            ))),
        }
    }
}

/// The transition table: next state for `(status, action)`, or why the
/// action is not allowed.
pub fn transition(
    status: InvoiceStatus,
    action: InvoiceAction,
) -> Result<InvoiceStatus, RejectionReason> {
    use InvoiceAction::*;
    use InvoiceStatus::*;

    match (status, action) {
        (Pending, Pay) => Ok(Paid),
        (Pending, Cancel) => Ok(Cancelled),
        (Pending, Refund) => Err(RejectionReason::NotYetPaid),

        (Paid, Pay) => Err(RejectionReason::AlreadyPaid),
        (Paid, Cancel) => Err(RejectionReason::RefundRequired),
        (Paid, Refund) => Ok(Refunded),

        (Cancelled, Cancel) => Err(RejectionReason::AlreadyCancelled),
        (Cancelled, Pay | Refund) => Err(RejectionReason::WasCancelled),

        (Refunded, Refund) => Err(RejectionReason::AlreadyRefunded),
        (Refunded, Pay | Cancel) => Err(RejectionReason::WasRefunded),
    }
}

/// Capability set every invoice state provides.
///
/// A handler receives the invoice it acts on and decides from that invoice's
/// current state, so calling a handler obtained from another state cannot
/// skip a transition. It either moves the invoice to its next state or rejects
/// the action and leaves the invoice untouched. Rejection is a normal outcome,
/// not an error.
pub trait InvoiceState {
    fn handle(&self, action: InvoiceAction, invoice: &mut Invoice) -> Outcome;

    fn pay(&self, invoice: &mut Invoice) -> Outcome {
        self.handle(InvoiceAction::Pay, invoice)
    }

    fn cancel(&self, invoice: &mut Invoice) -> Outcome {
        self.handle(InvoiceAction::Cancel, invoice)
    }

    fn refund(&self, invoice: &mut Invoice) -> Outcome {
        self.handle(InvoiceAction::Refund, invoice)
    }
}

// Each status is a zero-sized tag, so the value itself is the shared state
// object for every invoice in that state. Decisions are always taken from the
// invoice's own current state.
impl InvoiceState for InvoiceStatus {
    fn handle(&self, action: InvoiceAction, invoice: &mut Invoice) -> Outcome {
        let current = invoice.status();

        match transition(current, action) {
            Ok(next) => {
                invoice.transition_to(next, action);
                tracing::debug!(
                    invoice = %invoice.number(),
                    action = %action,
                    from = %current,
                    to = %next,
                    "invoice transitioned"
                );
                Outcome::Transitioned { from: current, to: next }
            }
            Err(reason) => {
                let rejection = Rejection {
                    invoice: invoice.number().clone(),
                    status: current,
                    action,
                    reason,
                };
                tracing::info!(
                    invoice = %rejection.invoice,
                    action = %action,
                    status = %current,
                    "{rejection}"
                );
                Outcome::Rejected(rejection)
            }
        }
    }
}

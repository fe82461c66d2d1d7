//! Results of asking an invoice to perform an action.

use serde::{Deserialize, Serialize};

use invoicefsm_core::{DomainError, DomainResult};

use crate::number::InvoiceNumber;
use crate::state::{InvoiceAction, InvoiceStatus};

/// Why an action is not allowed in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Refund requested before any payment.
    NotYetPaid,
    AlreadyPaid,
    /// Cancel requested on a paid invoice; only a refund can reverse it.
    RefundRequired,
    AlreadyCancelled,
    WasCancelled,
    AlreadyRefunded,
    WasRefunded,
}

/// Notice describing a rejected action. Its `Display` is the text written to
/// the log sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub invoice: InvoiceNumber,
    pub status: InvoiceStatus,
    pub action: InvoiceAction,
    pub reason: RejectionReason,
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let number = &self.invoice;
        let verb = self.action.past_participle();
        match self.reason {
            RejectionReason::NotYetPaid => {
                write!(f, "Invoice {number} has not been paid yet and cannot be {verb}.")
            }
            RejectionReason::AlreadyPaid => write!(f, "Invoice {number} has already been paid."),
            RejectionReason::RefundRequired => write!(
                f,
                "Invoice {number} has been paid and cannot be {verb}; refund it instead."
            ),
            RejectionReason::AlreadyCancelled => {
                write!(f, "Invoice {number} is already cancelled.")
            }
            RejectionReason::WasCancelled => {
                write!(f, "Invoice {number} was cancelled and cannot be {verb}.")
            }
            RejectionReason::AlreadyRefunded => {
                write!(f, "Invoice {number} cannot be refunded again.")
            }
            RejectionReason::WasRefunded => {
                write!(f, "Invoice {number} was refunded and cannot be {verb}.")
            }
        }
    }
}

/// What happened when an action was dispatched to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Transitioned {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, Outcome::Transitioned { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(rejection) => Some(rejection),
            Outcome::Transitioned { .. } => None,
        }
    }

    /// Treat a rejection as a failure, for callers that want strict semantics.
    ///
    /// Returns the state the invoice is in after the action.
    pub fn into_result(self) -> DomainResult<InvoiceStatus> {
        match self {
            Outcome::Transitioned { to, .. } => Ok(to),
            Outcome::Rejected(rejection) => Err(DomainError::invariant(rejection.to_string())),
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Transitioned { from, to } => write!(f, "{from} -> {to}"),
            Outcome::Rejected(rejection) => write!(f, "rejected: {rejection}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(status: InvoiceStatus, action: InvoiceAction, reason: RejectionReason) -> Rejection {
        Rejection {
            invoice: InvoiceNumber::from(100),
            status,
            action,
            reason,
        }
    }

    #[test]
    fn notices_name_invoice_and_reason() {
        let notice = rejection(
            InvoiceStatus::Refunded,
            InvoiceAction::Pay,
            RejectionReason::WasRefunded,
        )
        .to_string();
        assert_eq!(notice, "Invoice 100 was refunded and cannot be paid.");

        let notice = rejection(
            InvoiceStatus::Pending,
            InvoiceAction::Refund,
            RejectionReason::NotYetPaid,
        )
        .to_string();
        assert_eq!(notice, "Invoice 100 has not been paid yet and cannot be refunded.");

        let notice = rejection(
            InvoiceStatus::Paid,
            InvoiceAction::Cancel,
            RejectionReason::RefundRequired,
        )
        .to_string();
        assert!(notice.contains("refund it instead"));
    }

    #[test]
    fn strict_result_maps_rejection_to_invariant_violation() {
        let ok = Outcome::Transitioned {
            from: InvoiceStatus::Pending,
            to: InvoiceStatus::Paid,
        };
        assert_eq!(ok.into_result().unwrap(), InvoiceStatus::Paid);

        let rejected = Outcome::Rejected(rejection(
            InvoiceStatus::Refunded,
            InvoiceAction::Refund,
            RejectionReason::AlreadyRefunded,
        ));
        match rejected.into_result() {
            Err(DomainError::InvariantViolation(msg)) if msg.contains("refunded again") => {}
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invoicefsm_core::AggregateRoot;

use crate::number::InvoiceNumber;
use crate::outcome::Outcome;
use crate::state::{InvoiceAction, InvoiceState, InvoiceStatus};

/// One accepted state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: InvoiceStatus,
    pub to: InvoiceStatus,
    pub action: InvoiceAction,
    pub occurred_at: DateTime<Utc>,
}

/// Aggregate root: Invoice.
///
/// Owns its current state and forwards every action to it. The state is only
/// ever replaced by a state handler; there is no public setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    number: InvoiceNumber,
    status: InvoiceStatus,
    history: Vec<TransitionRecord>,
    version: u64,
}

impl Invoice {
    /// Create an invoice in the initial (pending) state.
    pub fn new(number: impl Into<InvoiceNumber>) -> Self {
        Self {
            number: number.into(),
            status: InvoiceStatus::INITIAL,
            history: Vec::new(),
            version: 0,
        }
    }

    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Accepted transitions, oldest first.
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn pay(&mut self) -> Outcome {
        let state = self.status;
        state.pay(self)
    }

    pub fn cancel(&mut self) -> Outcome {
        let state = self.status;
        state.cancel(self)
    }

    pub fn refund(&mut self) -> Outcome {
        let state = self.status;
        state.refund(self)
    }

    /// Dispatch an action chosen at runtime.
    pub fn perform(&mut self, action: InvoiceAction) -> Outcome {
        let state = self.status;
        state.handle(action, self)
    }

    pub fn snapshot(&self) -> InvoiceSnapshot {
        InvoiceSnapshot {
            number: self.number.clone(),
            status: self.status,
            version: self.version,
            history: self.history.clone(),
        }
    }

    // Called by state handlers only.
    pub(crate) fn transition_to(&mut self, next: InvoiceStatus, action: InvoiceAction) {
        self.history.push(TransitionRecord {
            from: self.status,
            to: next,
            action,
            occurred_at: Utc::now(),
        });
        self.status = next;
        self.version += 1;
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Serializable view of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub number: InvoiceNumber,
    pub status: InvoiceStatus,
    pub version: u64,
    pub history: Vec<TransitionRecord>,
}

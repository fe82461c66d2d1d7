//! Rejection notices as seen by a log subscriber.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use invoicefsm_invoicing::{Invoice, InvoiceAction, InvoiceNumber, InvoiceStatus, Outcome};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureLayer {
    fn take(&self) -> Vec<Captured> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.message,
        });
    }
}

fn with_capture<T>(f: impl FnOnce(&CaptureLayer) -> T) -> T {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || f(&layer))
}

fn invoice_in(status: InvoiceStatus) -> Invoice {
    let mut invoice = Invoice::new(InvoiceNumber::from(100));
    match status {
        InvoiceStatus::Pending => {}
        InvoiceStatus::Paid => {
            invoice.pay();
        }
        InvoiceStatus::Cancelled => {
            invoice.cancel();
        }
        InvoiceStatus::Refunded => {
            invoice.pay();
            invoice.refund();
        }
    }
    assert_eq!(invoice.status(), status);
    invoice
}

fn info_messages(events: &[Captured]) -> Vec<&str> {
    events
        .iter()
        .filter(|e| e.level == Level::INFO)
        .map(|e| e.message.as_str())
        .collect()
}

#[test]
fn every_action_emits_one_notice_or_none() {
    with_capture(|capture| {
        for status in InvoiceStatus::ALL {
            for action in InvoiceAction::ALL {
                let mut invoice = invoice_in(status);
                capture.take();

                let outcome = invoice.perform(action);
                let events = capture.take();
                let notices = info_messages(&events);

                match outcome {
                    Outcome::Rejected(rejection) => {
                        assert_eq!(
                            notices,
                            vec![rejection.to_string().as_str()],
                            "{status} + {action}"
                        );
                    }
                    Outcome::Transitioned { .. } => {
                        assert!(notices.is_empty(), "{status} + {action}: {notices:?}");
                    }
                }
            }
        }
    });
}

#[test]
fn refunded_invoice_notice_names_invoice_and_reason() {
    let notices = with_capture(|capture| {
        let mut invoice = invoice_in(InvoiceStatus::Refunded);
        capture.take();
        invoice.pay();
        capture.take()
    });

    let notices = info_messages(&notices)
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    assert_eq!(notices, vec!["Invoice 100 was refunded and cannot be paid.".to_string()]);
}

proptest! {
    /// Property: notices logged match the rejections returned, one for one.
    #[test]
    fn notices_match_rejections(
        actions in prop::collection::vec(prop::sample::select(InvoiceAction::ALL.to_vec()), 0..16)
    ) {
        let (expected, logged) = with_capture(|capture| {
            let mut invoice = Invoice::new(InvoiceNumber::from(7));
            let expected: Vec<String> = actions
                .iter()
                .filter_map(|action| invoice.perform(*action).rejection().map(ToString::to_string))
                .collect();
            let logged: Vec<String> = info_messages(&capture.take())
                .into_iter()
                .map(str::to_string)
                .collect();
            (expected, logged)
        });

        prop_assert_eq!(expected, logged);
    }
}

//! `invoicefsm <number> [action ...]`
//!
//! Creates an invoice, applies each action in order, prints every outcome and
//! finally the invoice snapshot as JSON.

use anyhow::{Context, Result, bail};

use invoicefsm_invoicing::{Invoice, InvoiceAction, InvoiceNumber, Outcome};

fn main() -> Result<()> {
    invoicefsm_observability::init();

    let mut args = std::env::args().skip(1);
    let Some(number) = args.next() else {
        bail!("usage: invoicefsm <number> [pay|cancel|refund ...]");
    };

    let number: InvoiceNumber = number.parse().context("invalid invoice number")?;
    let actions = args
        .map(|arg| {
            arg.parse::<InvoiceAction>()
                .with_context(|| format!("invalid action {arg:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut invoice = Invoice::new(number);
    tracing::debug!(invoice = %invoice.number(), "invoice created");

    for action in actions {
        match invoice.perform(action) {
            Outcome::Transitioned { from, to } => println!("{action}: {from} -> {to}"),
            Outcome::Rejected(rejection) => println!("{action}: rejected ({rejection})"),
        }
    }

    let snapshot = serde_json::to_string_pretty(&invoice.snapshot())
        .context("failed to serialize invoice snapshot")?;
    println!("{snapshot}");

    Ok(())
}

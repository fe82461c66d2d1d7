use core::str::FromStr;

use serde::{Deserialize, Serialize};

use invoicefsm_core::{DomainError, DomainResult, ValueObject};

/// Invoice number: an opaque, non-empty token identifying an invoice.
///
/// Immutable once assigned. Numeric numbers are accepted via `From<u64>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Build a number from a token, trimming surrounding whitespace.
    pub fn new(token: impl AsRef<str>) -> DomainResult<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return Err(DomainError::validation("invoice number must not be empty"));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for InvoiceNumber {}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InvoiceNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<u64> for InvoiceNumber {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for InvoiceNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InvoiceNumber> for String {
    fn from(value: InvoiceNumber) -> Self {
        value.0
    }
}

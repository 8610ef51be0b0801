//! Person value objects: validated, immutable descriptive data.

use serde::{Deserialize, Serialize};

use subscription_core::{DomainError, DomainResult, ValueObject};

/// A person's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    first: String,
    last: String,
}

impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> DomainResult<Self> {
        let first = first.into();
        let last = last.into();
        if first.is_empty() {
            return Err(DomainError::empty_field("firstname"));
        }
        if last.is_empty() {
            return Err(DomainError::empty_field("lastname"));
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn fullname(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl ValueObject for Name {}

/// A person's email address.
///
/// Only emptiness is rejected here; format checking is left to the surrounding
/// layers (e.g. the identity provider is the authority on deliverability).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::empty_field("email"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl ValueObject for Email {}

/// A tagged identity document.
///
/// Constructed only through [`Document::create`], which dispatches on the kind
/// tag to a kind-specific format check. New kinds extend the dispatch here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Document {
    Cpf(String),
    Cnpj(String),
}

impl Document {
    pub const CPF: &'static str = "cpf";
    pub const CNPJ: &'static str = "cnpj";

    /// Validating factory keyed by the kind tag.
    pub fn create(value: impl Into<String>, kind: &str) -> DomainResult<Self> {
        let value = value.into();
        match kind {
            Self::CPF => {
                validate_digits(&value, 11, Self::CPF)?;
                Ok(Self::Cpf(value))
            }
            Self::CNPJ => {
                validate_digits(&value, 14, Self::CNPJ)?;
                Ok(Self::Cnpj(value))
            }
            other => Err(DomainError::validation(format!(
                "'{other}' is not a valid document kind"
            ))),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Cpf(value) | Self::Cnpj(value) => value,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cpf(_) => Self::CPF,
            Self::Cnpj(_) => Self::CNPJ,
        }
    }
}

impl ValueObject for Document {}

fn validate_digits(value: &str, len: usize, kind: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::empty_field(kind));
    }
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(format!("'{kind}' is invalid")));
    }
    Ok(())
}

/// A postal address.
///
/// Structural shape only: apart from `complement` being optional, fields are
/// expected non-empty by convention but not enforced here — construction is
/// deliberately lenient and callers own any stricter checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub zip_code: String,
    pub number: String,
    pub complement: Option<String>,
    pub country: String,
}

impl Address {
    pub fn new(
        zip_code: impl Into<String>,
        number: impl Into<String>,
        complement: Option<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            number: number.into(),
            complement,
            country: country.into(),
        }
    }
}

impl ValueObject for Address {}

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::DocumentKind;
use crate::validation::{validate_document, DocumentError};

/// A CPF or CNPJ whose check digits have been verified.
///
/// Serializes as its punctuated form and only deserializes from valid input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    pub(crate) fn new_unchecked(kind: DocumentKind, digits: String) -> Self {
        Document { kind, digits }
    }

    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        validate_document(raw)
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Digits only, e.g. `52998224725`.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Punctuated form, e.g. `529.982.247-25`.
    pub fn formatted(&self) -> String {
        self.kind.format(&self.digits)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Document::parse(&raw).map_err(D::Error::custom)
    }
}

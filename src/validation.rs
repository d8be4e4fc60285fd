use thiserror::Error;

use crate::check_digit::{BrazilianCnpjChecksum, BrazilianCpfChecksum, Validator};
use crate::digits::strip_non_digits;
use crate::document::Document;
use crate::kind::DocumentKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("CPF inválido")]
    InvalidCpf,

    #[error("CNPJ inválido")]
    InvalidCnpj,

    #[error("Documents must have 11 (CPF) or 14 (CNPJ) digits, found {0}")]
    UnsupportedLength(usize),

    #[error("{0} documents are not accepted")]
    KindNotAllowed(DocumentKind),
}

impl DocumentError {
    pub fn invalid(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Cpf => DocumentError::InvalidCpf,
            DocumentKind::Cnpj => DocumentError::InvalidCnpj,
        }
    }
}

impl From<DocumentError> for i64 {
    fn from(value: DocumentError) -> i64 {
        match value {
            DocumentError::InvalidCpf => -1,
            DocumentError::InvalidCnpj => -2,
            DocumentError::UnsupportedLength(_) => -3,
            DocumentError::KindNotAllowed(_) => -4,
        }
    }
}

/// True if `raw` is a valid CPF (11 digits) or CNPJ (14 digits) once non-digits are removed.
pub fn is_valid_document(raw: &str) -> bool {
    let digits = strip_non_digits(raw);
    match DocumentKind::from_digit_count(digits.len()) {
        Some(DocumentKind::Cpf) => BrazilianCpfChecksum.is_valid_match(&digits),
        Some(DocumentKind::Cnpj) => BrazilianCnpjChecksum.is_valid_match(&digits),
        None => false,
    }
}

/// Validate `raw` and keep its clean digits, reporting why it was rejected.
pub fn validate_document(raw: &str) -> Result<Document, DocumentError> {
    let digits = strip_non_digits(raw);
    let kind = DocumentKind::from_digit_count(digits.len())
        .ok_or(DocumentError::UnsupportedLength(digits.len()))?;

    if !kind.is_valid_match(&digits) {
        return Err(DocumentError::invalid(kind));
    }
    Ok(Document::new_unchecked(kind, digits))
}

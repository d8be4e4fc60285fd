// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digit;
mod digits;
mod document;
mod formatting;
mod kind;
mod observability;
mod stats;
mod validation;
mod validator;

// This is the public API of the document validation library
pub use check_digit::{
    cnpj_check_digits, cpf_check_digits, is_valid_cnpj, is_valid_cpf, BrazilianCnpjChecksum,
    BrazilianCpfChecksum, Validator,
};
pub use digits::{digit_values, is_repeated_sequence, strip_non_digits};
pub use document::Document;
pub use formatting::{format_cnpj, format_cpf, format_document};
pub use kind::{DocumentKind, CNPJ_DIGIT_COUNT, CPF_DIGIT_COUNT};
pub use observability::labels::Labels;
pub use validation::{is_valid_document, validate_document, DocumentError};
pub use validator::{
    config::DocumentValidatorConfig, error::CreateValidatorError, DocumentValidator,
};

#[cfg(feature = "bench")]
pub use check_digit::{cpf_check_digit_by_remainder, cpf_check_digits_by_remainder};

mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;

pub use crate::check_digit::brazilian_cnpj_checksum::{
    cnpj_check_digits, is_valid_cnpj, BrazilianCnpjChecksum,
};
pub use crate::check_digit::brazilian_cpf_checksum::{
    cpf_check_digits, is_valid_cpf, BrazilianCpfChecksum,
};

#[cfg(any(test, feature = "bench"))]
pub use crate::check_digit::brazilian_cpf_checksum::{
    cpf_check_digit_by_remainder, cpf_check_digits_by_remainder,
};

use crate::kind::DocumentKind;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

/// Modulo 11 reduction shared by CPF and CNPJ: a remainder below 2 yields 0.
#[inline]
fn mod_11_check_digit(weighted_sum: u32) -> u32 {
    let remainder = weighted_sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

fn contains_only_digit_values(prefix: &[u32]) -> bool {
    prefix.iter().all(|d| *d <= 9)
}

impl Validator for DocumentKind {
    fn is_valid_match(&self, input: &str) -> bool {
        match self {
            DocumentKind::Cpf => BrazilianCpfChecksum.is_valid_match(input),
            DocumentKind::Cnpj => BrazilianCnpjChecksum.is_valid_match(input),
        }
    }
}

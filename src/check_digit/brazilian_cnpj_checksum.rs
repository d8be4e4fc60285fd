use crate::check_digit::{contains_only_digit_values, mod_11_check_digit, Validator};
use crate::digits::{digit_values, is_repeated_sequence};
use crate::kind::CNPJ_DIGIT_COUNT;

pub struct BrazilianCnpjChecksum;

// XX.XXX.XXX/YYYY-ZZ, the check digits ZZ are computed from the first 12 digits
const CNPJ_BASE_DIGIT_COUNT: usize = CNPJ_DIGIT_COUNT - 2;

// Weights cycle from 2 to 9 starting at the rightmost digit of the prefix.
fn cnpj_check_digit(prefix: &[u32]) -> u32 {
    let sum: u32 = prefix
        .iter()
        .rev()
        .enumerate()
        .map(|(position, digit)| digit * (2 + (position as u32 % 8)))
        .sum();
    mod_11_check_digit(sum)
}

/// Compute both check digits from the 12 base digits of a CNPJ.
pub fn cnpj_check_digits(base: &[u32]) -> Option<[u32; 2]> {
    if base.len() != CNPJ_BASE_DIGIT_COUNT || !contains_only_digit_values(base) {
        return None;
    }
    let v1 = cnpj_check_digit(base);
    let mut extended = base.to_vec();
    extended.push(v1);
    Some([v1, cnpj_check_digit(&extended)])
}

/// Validate a CNPJ. Non-digit characters are ignored.
pub fn is_valid_cnpj(digits: &str) -> bool {
    BrazilianCnpjChecksum.is_valid_match(digits)
}

impl Validator for BrazilianCnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid_match(&self, input: &str) -> bool {
        let digits = digit_values(input);
        if digits.len() != CNPJ_DIGIT_COUNT || is_repeated_sequence(&digits) {
            return false;
        }

        let (base, actual) = digits.split_at(CNPJ_BASE_DIGIT_COUNT);
        // Compare the computed checksum with the provided one
        cnpj_check_digits(base).is_some_and(|expected| expected == actual)
    }
}

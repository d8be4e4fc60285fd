use crate::check_digit::{contains_only_digit_values, Validator};
use crate::digits::{digit_values, is_repeated_sequence};
use crate::kind::CPF_DIGIT_COUNT;

pub struct BrazilianCpfChecksum;

const CPF_BASE_DIGIT_COUNT: usize = CPF_DIGIT_COUNT - 2;

// https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
// The digit at index `i` of the prefix weighs `prefix.len() + 1 - i`, so 10..2 for the
// first check digit and 11..2 for the second.
fn weighted_sum(prefix: &[u32]) -> u32 {
    let first_weight = prefix.len() as u32 + 1;
    prefix
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (first_weight - i as u32))
        .sum()
}

fn times_ten_mod_11(sum: u32) -> u32 {
    let digit = sum * 10 % 11;
    if digit >= 10 {
        0
    } else {
        digit
    }
}

fn cpf_check_digit(prefix: &[u32]) -> u32 {
    times_ten_mod_11(weighted_sum(prefix))
}

/// Same digit as [cpf_check_digit], computed from the plain remainder of the weighted sum.
#[cfg(any(test, feature = "bench"))]
pub fn cpf_check_digit_by_remainder(prefix: &[u32]) -> u32 {
    crate::check_digit::mod_11_check_digit(weighted_sum(prefix))
}

#[cfg(any(test, feature = "bench"))]
pub fn cpf_check_digits_by_remainder(base: &[u32]) -> Option<[u32; 2]> {
    if base.len() != CPF_BASE_DIGIT_COUNT || !contains_only_digit_values(base) {
        return None;
    }
    let v1 = cpf_check_digit_by_remainder(base);
    let mut extended = base.to_vec();
    extended.push(v1);
    Some([v1, cpf_check_digit_by_remainder(&extended)])
}

/// Compute both check digits from the 9 base digits of a CPF.
pub fn cpf_check_digits(base: &[u32]) -> Option<[u32; 2]> {
    if base.len() != CPF_BASE_DIGIT_COUNT || !contains_only_digit_values(base) {
        return None;
    }
    let v1 = cpf_check_digit(base);
    let mut extended = base.to_vec();
    extended.push(v1);
    Some([v1, cpf_check_digit(&extended)])
}

/// Validate a CPF. Non-digit characters are ignored, so both `529.982.247-25` and
/// `52998224725` are accepted.
pub fn is_valid_cpf(digits: &str) -> bool {
    BrazilianCpfChecksum.is_valid_match(digits)
}

impl Validator for BrazilianCpfChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        let digits = digit_values(input);
        if digits.len() != CPF_DIGIT_COUNT {
            return false;
        }
        // Repeated digits pass the checksum, but are never issued
        if is_repeated_sequence(&digits) {
            return false;
        }

        let (base, actual) = digits.split_at(CPF_BASE_DIGIT_COUNT);
        match cpf_check_digits(base) {
            Some(expected) => expected == actual,
            None => false,
        }
    }
}

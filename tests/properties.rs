use br_docs::{
    cnpj_check_digits, cpf_check_digit_by_remainder, cpf_check_digits,
    cpf_check_digits_by_remainder, format_cnpj, format_cpf, format_document, is_valid_cnpj,
    is_valid_cpf, is_valid_document, strip_non_digits,
};
use proptest::prelude::*;

fn to_string(digits: &[u32]) -> String {
    digits.iter().map(|d| d.to_string()).collect()
}

fn not_repeated(digits: &[u32]) -> bool {
    digits.iter().any(|d| *d != digits[0])
}

proptest! {
    #[test]
    fn strip_keeps_only_digits_in_order(raw in ".*") {
        let stripped = strip_non_digits(&raw);
        prop_assert!(stripped.chars().all(|c| ('0'..='9').contains(&c)));

        // stripped is a subsequence of raw and only non-digits were skipped
        let mut remaining = stripped.chars().peekable();
        for c in raw.chars() {
            if remaining.peek() == Some(&c) {
                remaining.next();
            } else {
                prop_assert!(!('0'..='9').contains(&c), "digit {:?} was dropped", c);
            }
        }
        prop_assert!(remaining.next().is_none());
    }

    #[test]
    fn format_document_is_idempotent(raw in "[0-9 ./-]{0,24}") {
        let once = format_document(&raw);
        prop_assert_eq!(format_document(&once), once.clone());
        prop_assert_eq!(strip_non_digits(&once).len(), strip_non_digits(&raw).len().min(14));
    }

    #[test]
    fn formatting_keeps_digits(digits in "[0-9]{0,11}") {
        prop_assert_eq!(strip_non_digits(&format_cpf(&digits)), digits.clone());
        prop_assert_eq!(strip_non_digits(&format_cnpj(&digits)), digits);
    }

    #[test]
    fn repeated_digits_are_never_valid(digit in 0u32..10) {
        prop_assert!(!is_valid_cpf(&digit.to_string().repeat(11)));
        prop_assert!(!is_valid_cnpj(&digit.to_string().repeat(14)));
    }

    #[test]
    fn computed_cpf_is_valid(base in prop::collection::vec(0u32..10, 9)) {
        let check = cpf_check_digits(&base).unwrap();
        let mut digits = base.clone();
        digits.extend(check);
        prop_assume!(not_repeated(&digits));

        let id = to_string(&digits);
        prop_assert!(is_valid_cpf(&id));
        prop_assert!(is_valid_cpf(&format_cpf(&id)));
        prop_assert!(is_valid_document(&id));

        // the last digit only enters the second comparison, changing it always fails
        let mut altered = digits.clone();
        altered[10] = (altered[10] + 1) % 10;
        prop_assert!(!is_valid_cpf(&to_string(&altered)));
    }

    #[test]
    fn computed_cnpj_is_valid(base in prop::collection::vec(0u32..10, 12)) {
        let check = cnpj_check_digits(&base).unwrap();
        let mut digits = base.clone();
        digits.extend(check);
        prop_assume!(not_repeated(&digits));

        let id = to_string(&digits);
        prop_assert!(is_valid_cnpj(&id));
        prop_assert!(is_valid_cnpj(&format_cnpj(&id)));
        prop_assert!(is_valid_document(&id));

        let mut altered = digits.clone();
        altered[13] = (altered[13] + 1) % 10;
        prop_assert!(!is_valid_cnpj(&to_string(&altered)));
    }

    #[test]
    fn cpf_formulas_agree(base in prop::collection::vec(0u32..10, 9)) {
        prop_assert_eq!(cpf_check_digits(&base), cpf_check_digits_by_remainder(&base));
        prop_assert_eq!(cpf_check_digit_by_remainder(&base), cpf_check_digits(&base).unwrap()[0]);
    }

    #[test]
    fn other_lengths_are_never_documents(digits in "[0-9]{0,20}") {
        prop_assume!(digits.len() != 11 && digits.len() != 14);
        prop_assert!(!is_valid_document(&digits));
    }
}

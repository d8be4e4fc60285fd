use crate::digits::{count_digits, get_next_digit};
use crate::kind::{CNPJ_DIGIT_COUNT, CPF_DIGIT_COUNT};

/// Separators of a punctuated document, keyed by the index of the digit they precede.
struct DocumentMask {
    digit_count: usize,
    separators: &'static [(usize, char)],
}

// XXX.XXX.XXX-XX
const CPF_MASK: DocumentMask = DocumentMask {
    digit_count: CPF_DIGIT_COUNT,
    separators: &[(3, '.'), (6, '.'), (9, '-')],
};

// XX.XXX.XXX/XXXX-XX
const CNPJ_MASK: DocumentMask = DocumentMask {
    digit_count: CNPJ_DIGIT_COUNT,
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
};

impl DocumentMask {
    /// A separator is only written once a digit follows it, so partial input is formatted
    /// progressively. Digits beyond the mask size are dropped.
    fn apply(&self, raw: &str) -> String {
        let mut formatted = String::with_capacity(self.digit_count + self.separators.len());
        let mut chars = raw.chars();
        let mut separators = self.separators.iter().peekable();

        for digit_idx in 0..self.digit_count {
            let Some(digit) = get_next_digit(&mut chars) else {
                break;
            };
            if let Some((_, separator)) = separators.next_if(|(idx, _)| *idx == digit_idx) {
                formatted.push(*separator);
            }
            if let Some(c) = char::from_digit(digit, 10) {
                formatted.push(c);
            }
        }
        formatted
    }
}

/// Render `raw` as `XXX.XXX.XXX-XX`, using at most its first 11 digits.
pub fn format_cpf(raw: &str) -> String {
    CPF_MASK.apply(raw)
}

/// Render `raw` as `XX.XXX.XXX/XXXX-XX`, using at most its first 14 digits.
pub fn format_cnpj(raw: &str) -> String {
    CNPJ_MASK.apply(raw)
}

/// Up to 11 digits are rendered as a CPF, anything longer as a CNPJ. Nothing is validated.
pub fn format_document(raw: &str) -> String {
    if count_digits(raw) <= CPF_DIGIT_COUNT {
        format_cpf(raw)
    } else {
        format_cnpj(raw)
    }
}

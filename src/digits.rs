use std::str::Chars;

/// Remove every character that is not an ASCII digit, keeping the order of the digits.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits found in `raw`, in order.
pub fn digit_values(raw: &str) -> Vec<u32> {
    let mut chars = raw.chars();
    let mut digits = Vec::with_capacity(raw.len());
    while let Some(digit) = get_next_digit(&mut chars) {
        digits.push(digit);
    }
    digits
}

/// True when there is at least one digit and all of them are the same (e.g. `000.000.000-00`).
pub fn is_repeated_sequence(digits: &[u32]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

pub(crate) fn get_next_digit(chars: &mut Chars<'_>) -> Option<u32> {
    for char in chars.by_ref() {
        if let Some(digit) = char.to_digit(10) {
            return Some(digit);
        }
    }
    None
}

/// Number of ASCII digits in `raw`, without allocating.
pub(crate) fn count_digits(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}

use afl::fuzz;
use br_docs::{
    cnpj_check_digits, cpf_check_digits, cpf_check_digits_by_remainder, digit_values,
    format_cnpj, format_cpf, format_document, is_valid_cnpj, is_valid_cpf, is_valid_document,
    strip_non_digits, validate_document, DocumentKind,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let digits = strip_non_digits(input);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));

    // the dispatcher agrees with the kind-specific validators
    let expected = match DocumentKind::from_digit_count(digits.len()) {
        Some(DocumentKind::Cpf) => is_valid_cpf(&digits),
        Some(DocumentKind::Cnpj) => is_valid_cnpj(&digits),
        None => false,
    };
    assert_eq!(is_valid_document(input), expected);
    assert_eq!(validate_document(input).is_ok(), expected);

    let formatted = format_document(input);
    assert_eq!(format_document(&formatted), formatted);
    assert!(format_cpf(input).len() <= DocumentKind::Cpf.formatted_len());
    assert!(format_cnpj(input).len() <= DocumentKind::Cnpj.formatted_len());
    if expected {
        assert!(is_valid_document(&formatted));
    }

    // build a document from random base digits, it must validate unless all digits repeat
    let kind = if rng.gen_bool(0.5) {
        DocumentKind::Cpf
    } else {
        DocumentKind::Cnpj
    };
    let base: Vec<u32> = (0..kind.digit_count() - 2)
        .map(|_| rng.gen_range(0..10))
        .collect();
    let check = match kind {
        DocumentKind::Cpf => {
            let check = cpf_check_digits(&base);
            assert_eq!(check, cpf_check_digits_by_remainder(&base));
            check
        }
        DocumentKind::Cnpj => cnpj_check_digits(&base),
    };
    let Some(check) = check else {
        panic!("check digits must be computable for {:?}", base);
    };
    let generated: String = base
        .iter()
        .chain(check.iter())
        .map(|d| d.to_string())
        .collect();
    let repeated = digit_values(&generated).windows(2).all(|w| w[0] == w[1]);
    assert_eq!(is_valid_document(&kind.format(&generated)), !repeated);
}

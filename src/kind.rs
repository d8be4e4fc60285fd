use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::digits::count_digits;
use crate::formatting::{format_cnpj, format_cpf};

pub const CPF_DIGIT_COUNT: usize = 11;
pub const CNPJ_DIGIT_COUNT: usize = 14;

/// The kind of a Brazilian taxpayer document, determined only by how many digits it has.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoa Física (individuals), 11 digits.
    #[strum(to_string = "CPF", serialize = "cpf")]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (companies), 14 digits.
    #[strum(to_string = "CNPJ", serialize = "cnpj")]
    Cnpj,
}

impl DocumentKind {
    /// `None` for any count other than 11 or 14.
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            CPF_DIGIT_COUNT => Some(DocumentKind::Cpf),
            CNPJ_DIGIT_COUNT => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Detect the kind of a raw input after ignoring every non-digit character.
    pub fn detect(raw: &str) -> Option<Self> {
        Self::from_digit_count(count_digits(raw))
    }

    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_DIGIT_COUNT,
            DocumentKind::Cnpj => CNPJ_DIGIT_COUNT,
        }
    }

    /// Length of the fully punctuated form, e.g. 14 for `XXX.XXX.XXX-XX`.
    pub fn formatted_len(&self) -> usize {
        match self {
            DocumentKind::Cpf => 14,
            DocumentKind::Cnpj => 18,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Render `raw` with this kind's separators, regardless of its digit count.
    pub fn format(&self, raw: &str) -> String {
        match self {
            DocumentKind::Cpf => format_cpf(raw),
            DocumentKind::Cnpj => format_cnpj(raw),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_detect_kind() {
        let test_cases = vec![
            ("", None),
            ("5299822472", None),
            ("529.982.247-25", Some(DocumentKind::Cpf)),
            ("52998224725", Some(DocumentKind::Cpf)),
            ("112223330001", None),
            ("1122233300018", None),
            ("11.222.333/0001-81", Some(DocumentKind::Cnpj)),
            ("112223330001810", None),
        ];

        for (input, expected) in test_cases {
            assert_eq!(DocumentKind::detect(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_kind_lengths_match_formatting() {
        for kind in DocumentKind::iter() {
            let digits = "9".repeat(kind.digit_count());
            assert_eq!(kind.format(&digits).len(), kind.formatted_len());
            assert_eq!(DocumentKind::from_digit_count(kind.digit_count()), Some(kind));
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DocumentKind::Cpf.to_string(), "CPF");
        assert_eq!(DocumentKind::Cnpj.name(), "CNPJ");
        assert_eq!(DocumentKind::from_str("cnpj"), Ok(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::from_str("CPF"), Ok(DocumentKind::Cpf));
        assert!(DocumentKind::from_str("rg").is_err());
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&DocumentKind::Cpf).unwrap(),
            "\"cpf\""
        );
        assert_eq!(
            serde_json::from_str::<DocumentKind>("\"cnpj\"").unwrap(),
            DocumentKind::Cnpj
        );
    }
}

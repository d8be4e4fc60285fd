use crate::check_digit::Validator;
use crate::digits::{count_digits, strip_non_digits};
use crate::document::Document;
use crate::formatting::format_document;
use crate::kind::DocumentKind;
use crate::observability::labels::Labels;
use crate::stats::GLOBAL_STATS;
use crate::validation::DocumentError;

use self::metrics::ValidatorMetrics;

pub mod config;
pub mod error;
pub mod metrics;


/// Validates and formats the document field of a form. Only the configured kinds are accepted,
/// and every outcome is counted through the `metrics` facade.
pub struct DocumentValidator {
    kinds: Vec<DocumentKind>,
    labels: Labels,
    metrics: ValidatorMetrics,
}

impl DocumentValidator {
    pub(crate) fn new(kinds: Vec<DocumentKind>, labels: &Labels) -> Self {
        let stats = &*GLOBAL_STATS;
        stats.validator_creations.increment(1);
        stats.increment_total_validators();

        DocumentValidator {
            kinds,
            labels: labels.clone(),
            metrics: ValidatorMetrics::new(labels),
        }
    }

    pub fn accepts(&self, kind: DocumentKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> &[DocumentKind] {
        &self.kinds
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn validate(&self, raw: &str) -> Result<Document, DocumentError> {
        let digits = strip_non_digits(raw);
        let Some(kind) = DocumentKind::from_digit_count(digits.len()) else {
            self.metrics.rejected_length.increment(1);
            return Err(DocumentError::UnsupportedLength(digits.len()));
        };

        let kind_metrics = self.metrics.for_kind(kind);
        if !self.accepts(kind) {
            kind_metrics.not_allowed.increment(1);
            return Err(DocumentError::KindNotAllowed(kind));
        }

        if !kind.is_valid_match(&digits) {
            kind_metrics.invalid.increment(1);
            return Err(DocumentError::invalid(kind));
        }

        kind_metrics.valid.increment(1);
        Ok(Document::new_unchecked(kind, digits))
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }

    /// Format the current field value. A validator accepting a single kind always uses its
    /// pattern, otherwise the pattern follows the number of digits typed so far.
    pub fn format(&self, raw: &str) -> String {
        match self.kinds.as_slice() {
            [kind] => kind.format(raw),
            _ => format_document(raw),
        }
    }

    /// True when the digits typed so far have the length of an accepted kind.
    pub fn is_complete(&self, raw: &str) -> bool {
        let count = count_digits(raw);
        self.kinds.iter().any(|kind| kind.digit_count() == count)
    }
}

impl Validator for DocumentValidator {
    fn is_valid_match(&self, input: &str) -> bool {
        self.is_valid(input)
    }
}

impl Drop for DocumentValidator {
    fn drop(&mut self) {
        let stats = &*GLOBAL_STATS;
        stats.validator_deletions.increment(1);
        stats.decrement_total_validators();
    }
}

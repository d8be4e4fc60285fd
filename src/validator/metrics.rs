use crate::kind::DocumentKind;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

const KIND: &str = "kind";
const RESULT: &str = "result";

pub struct KindMetrics {
    pub valid: Counter,
    pub invalid: Counter,
    pub not_allowed: Counter,
}

impl KindMetrics {
    fn new(labels: &Labels, kind: DocumentKind) -> Self {
        let labels = labels.clone_with_labels(Labels::new(&[(KIND, kind.name())]));
        KindMetrics {
            valid: counter!(
                "document.validations",
                labels.clone_with_labels(Labels::new(&[(RESULT, "valid")]))
            ),
            invalid: counter!(
                "document.validations",
                labels.clone_with_labels(Labels::new(&[(RESULT, "invalid")]))
            ),
            not_allowed: counter!("document.rejected_kind", labels),
        }
    }
}

pub struct ValidatorMetrics {
    cpf: KindMetrics,
    cnpj: KindMetrics,
    pub rejected_length: Counter,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidatorMetrics {
            cpf: KindMetrics::new(labels, DocumentKind::Cpf),
            cnpj: KindMetrics::new(labels, DocumentKind::Cnpj),
            rejected_length: counter!("document.rejected_length", labels.clone()),
        }
    }

    pub fn for_kind(&self, kind: DocumentKind) -> &KindMetrics {
        match kind {
            DocumentKind::Cpf => &self.cpf,
            DocumentKind::Cnpj => &self.cnpj,
        }
    }
}

impl Default for ValidatorMetrics {
    fn default() -> Self {
        ValidatorMetrics::new(&NO_LABEL)
    }
}

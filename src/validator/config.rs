use crate::kind::DocumentKind;
use crate::observability::labels::Labels;
use crate::validator::error::CreateValidatorError;
use crate::validator::DocumentValidator;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

fn all_kinds() -> Vec<DocumentKind> {
    vec![DocumentKind::Cpf, DocumentKind::Cnpj]
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentValidatorConfig {
    /// Kinds accepted by the validator, both by default
    #[serde(default = "all_kinds")]
    pub kinds: Vec<DocumentKind>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl Default for DocumentValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentValidatorConfig {
    pub fn new() -> Self {
        Self {
            kinds: all_kinds(),
            labels: Labels::default(),
        }
    }

    pub fn kinds(&self, kinds: &[DocumentKind]) -> Self {
        self.mutate_clone(|x| x.kinds = kinds.to_vec())
    }

    /// Accept a single kind, e.g. a company signup form only takes CNPJs.
    pub fn only(&self, kind: DocumentKind) -> Self {
        self.kinds(&[kind])
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Result<DocumentValidator, CreateValidatorError> {
        if self.kinds.is_empty() {
            return Err(CreateValidatorError::NoAcceptedKinds);
        }
        let mut kinds = self.kinds.clone();
        kinds.sort();
        kinds.dedup();
        Ok(DocumentValidator::new(kinds, &self.labels))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

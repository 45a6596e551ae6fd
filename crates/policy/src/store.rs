//! Policy (SOP) document resolution.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use storesight_core::{AnalysisError, AnalysisResult};

/// Outcome of a policy lookup.
///
/// A tagged result, deliberately: an absent policy must never be mistakable
/// for policy text, so there is no sentinel string anywhere in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyText {
    Found(String),
    NotFound,
}

impl PolicyText {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text),
            Self::NotFound => None,
        }
    }
}

/// Resolves policy ids to documents under a configured root directory.
///
/// The naming convention is `<root>/<policy_id>.txt`. The root is explicit
/// construction-time configuration.
#[derive(Debug, Clone)]
pub struct PolicyStore {
    root: PathBuf,
}

impl PolicyStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `policy_id` to its full document text.
    ///
    /// A missing document is a normal outcome (`PolicyText::NotFound`), not
    /// an error. Ids that would escape the policy root are rejected before
    /// touching the filesystem.
    pub fn load(&self, policy_id: &str) -> AnalysisResult<PolicyText> {
        validate_policy_id(policy_id)?;

        let path = self.root.join(format!("{policy_id}.txt"));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(PolicyText::Found(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(policy_id, "policy document not found");
                Ok(PolicyText::NotFound)
            }
            Err(e) => Err(AnalysisError::io(format!("policy {policy_id}: {e}"))),
        }
    }
}

/// Policy ids name flat files under the root; anything that looks like a
/// path is refused.
fn validate_policy_id(policy_id: &str) -> AnalysisResult<()> {
    if policy_id.is_empty() {
        return Err(AnalysisError::invalid_input("policy id is empty"));
    }
    if policy_id.contains(['/', '\\']) || policy_id.contains("..") {
        return Err(AnalysisError::invalid_input(format!(
            "policy id {policy_id:?} must not contain path segments"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;

    fn store_with(docs: &[(&str, &str)]) -> (tempfile::TempDir, PolicyStore) {
        let dir = tempfile::tempdir().unwrap();
        for (id, body) in docs {
            let mut f = File::create(dir.path().join(format!("{id}.txt"))).unwrap();
            f.write_all(body.as_bytes()).unwrap();
        }
        let store = PolicyStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn resolves_known_policy_to_full_text() {
        let (_dir, store) = store_with(&[(
            "SOP-FIN-003",
            "Pricing and Discount Policy.\nMax authorized discount: 15%.\n",
        )]);

        let result = store.load("SOP-FIN-003").unwrap();
        assert_eq!(
            result.as_text().unwrap(),
            "Pricing and Discount Policy.\nMax authorized discount: 15%.\n"
        );
    }

    #[test]
    fn unknown_policy_is_not_found_not_an_error() {
        let (_dir, store) = store_with(&[]);
        let result = store.load("SOP-QA-001").unwrap();
        assert_eq!(result, PolicyText::NotFound);
        assert!(!result.is_found());
    }

    #[test]
    fn empty_document_is_still_found() {
        // Found("") and NotFound must stay distinguishable.
        let (_dir, store) = store_with(&[("SOP-OPS-004", "")]);
        let result = store.load("SOP-OPS-004").unwrap();
        assert_eq!(result, PolicyText::Found(String::new()));
    }

    #[test]
    fn path_like_ids_are_rejected() {
        let (_dir, store) = store_with(&[]);
        for bad in ["../secrets", "a/b", "a\\b", ""] {
            let err = store.load(bad).unwrap_err();
            assert!(
                matches!(err, AnalysisError::InvalidInput(_)),
                "expected InvalidInput for {bad:?}, got {err:?}"
            );
        }
    }
}

//! Resolution of raw CSV column headers against the datatype directory.
//!
//! Headers in the exports and keys in the directory were written by different
//! people, so a header is tried against the normalized directory index through
//! a fixed cascade. The first step that hits wins:
//!
//! 1. `Exact`: the normalized header.
//! 2. `SuffixAdded`: normalized header + `data`.
//! 3. `SuffixStripped`: normalized header without a trailing `data`.
//! 4. `OrToAnd`: the standalone word `or` replaced by `and`, then normalized.
//!    Word boundaries are ASCII-only, so `or` right after `é` still counts
//!    as a standalone word.
//! 5. `OtherRemoved`: normalized header with every `other` deleted.
//! 6. `Containment`: strip the filler tokens `data`, `ids`, `device`,
//!    `other`, `and`, `or`; the first index key (in directory order)
//!    containing what is left wins.
//!
//! Step 6 depends on directory order when several keys contain the residual.

use std::sync::LazyLock;

use dss_core::normalize;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::directory::DatatypeDirectory;

static OR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?-u:\b)or(?-u:\b)").expect("or-word pattern is valid"));

static FILLER_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("data|ids|device|other|and|or").expect("filler-token pattern is valid")
});

/// Which cascade step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStep {
    Exact,
    SuffixAdded,
    SuffixStripped,
    OrToAnd,
    OtherRemoved,
    Containment,
}

/// A successful match: the canonical directory key and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatatypeMatch {
    pub key: String,
    pub step: MatchStep,
}

/// Run the cascade for `raw_label`. Blank labels never match.
#[must_use]
pub fn match_datatype_key(raw_label: &str, directory: &DatatypeDirectory) -> Option<DatatypeMatch> {
    let raw = raw_label.trim();
    if raw.is_empty() {
        return None;
    }

    let found = |candidate: &str, step: MatchStep| {
        directory.lookup(candidate).map(|key| DatatypeMatch {
            key: key.to_string(),
            step,
        })
    };

    let norm = normalize(raw);

    let matched = found(&norm, MatchStep::Exact)
        .or_else(|| found(&format!("{norm}data"), MatchStep::SuffixAdded))
        .or_else(|| {
            norm.strip_suffix("data")
                .and_then(|stripped| found(stripped, MatchStep::SuffixStripped))
        })
        .or_else(|| {
            let with_and = normalize(&OR_WORD.replace_all(raw, "and"));
            found(&with_and, MatchStep::OrToAnd)
        })
        .or_else(|| found(&norm.replace("other", ""), MatchStep::OtherRemoved))
        .or_else(|| containment(&norm, directory));

    if let Some(hit) = &matched {
        tracing::debug!(label = raw, key = %hit.key, step = ?hit.step, "datatype matched");
    }
    matched
}

fn containment(norm: &str, directory: &DatatypeDirectory) -> Option<DatatypeMatch> {
    let residual = FILLER_TOKENS.replace_all(norm, "");
    if residual.is_empty() {
        return None;
    }
    directory
        .index()
        .find(|(normalized, _)| normalized.contains(residual.as_ref()))
        .map(|(_, key)| DatatypeMatch {
            key: key.to_string(),
            step: MatchStep::Containment,
        })
}

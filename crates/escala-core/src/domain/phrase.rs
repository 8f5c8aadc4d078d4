use serde::{Deserialize, Serialize};

/// Phrasebook line in the local language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub word: String,
    pub phonetic: String,
    pub simplified: String,
    pub meaning: String,
}

// File: src/core/group.rs
use crate::core::types::{Direction, Pair, Tier};
use crate::error::Result;
use crate::persistence::load_group_json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Three ordered pair lists, merged from one or more data sources.
/// Duplicates are kept; the mapping derived later resolves them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationGroup {
    #[serde(default)]
    pub phrases: Vec<Pair>,
    #[serde(default)]
    pub words: Vec<Pair>,
    #[serde(default)]
    pub characters: Vec<Pair>,
}

/// How to assemble a `TranslationGroup`. Parts are merged in field order:
/// the seed first, then every JSON source, then every in-memory data set.
#[derive(Debug, Clone, Default)]
pub struct GroupConfig {
    pub seed: Option<TranslationGroup>,
    pub sources: Vec<PathBuf>,
    pub data: Vec<TranslationGroup>,
}

impl GroupConfig {
    pub fn from_source(path: impl Into<PathBuf>) -> Self {
        Self { sources: vec![path.into()], ..Self::default() }
    }
}

impl TranslationGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GroupConfig) -> Result<Self> {
        let mut group = config.seed.unwrap_or_default();
        for path in &config.sources {
            group.merge(load_group_json(path)?);
        }
        for data in config.data {
            group.merge(data);
        }
        Ok(group)
    }

    /// Appends every pair of `other`, preserving order.
    pub fn merge(&mut self, other: TranslationGroup) {
        debug!(
            phrases = other.phrases.len(),
            words = other.words.len(),
            characters = other.characters.len(),
            "merging pairs into group"
        );

        self.phrases.extend(other.phrases);
        self.words.extend(other.words);
        self.characters.extend(other.characters);

        debug!(
            phrases = self.phrases.len(),
            words = self.words.len(),
            characters = self.characters.len(),
            "group updated"
        );
    }

    pub fn pairs(&self, tier: Tier) -> &[Pair] {
        match tier {
            Tier::Phrases => &self.phrases,
            Tier::Words => &self.words,
            Tier::Characters => &self.characters,
        }
    }

    /// Total number of pairs across all tiers.
    pub fn len(&self) -> usize {
        self.phrases.len() + self.words.len() + self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the source -> target lookup for `direction`. Keys are lowercased;
    /// a later pair overwrites an earlier one with the same key.
    pub fn derive_mapping(&self, direction: Direction) -> DirectionalMapping {
        let mut mapping = DirectionalMapping::default();
        for tier in Tier::PRIORITY {
            let table = &mut mapping.tiers[tier.index()];
            for pair in self.pairs(tier) {
                let (key, value) = direction.orient(pair);
                if key.is_empty() {
                    warn!(tier = tier.name(), value, "skipping pair with an empty source term");
                    continue;
                }
                table.insert(key.to_lowercase(), value.to_string());
            }
        }
        mapping
    }
}

/// Per-tier lookup tables for one direction. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionalMapping {
    tiers: [HashMap<String, String>; 3],
}

impl DirectionalMapping {
    pub fn tier(&self, tier: Tier) -> &HashMap<String, String> {
        &self.tiers[tier.index()]
    }

    /// Exact lookup; `key` is expected in lowercase.
    pub fn get(&self, tier: Tier, key: &str) -> Option<&str> {
        self.tier(tier).get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pairs(list: &[(&str, &str)]) -> Vec<Pair> {
        list.iter().map(|&(a, b)| Pair::new(a, b)).collect()
    }

    fn group(phrases: &[(&str, &str)], words: &[(&str, &str)], characters: &[(&str, &str)]) -> TranslationGroup {
        TranslationGroup {
            phrases: pairs(phrases),
            words: pairs(words),
            characters: pairs(characters),
        }
    }

    #[test]
    fn merge_appends_without_dedup() {
        let mut base = group(&[], &[("my", "ma")], &[("t", "d")]);
        base.merge(group(&[("do you do", "diya do")], &[("my", "ma")], &[]));

        assert_eq!(base.phrases, vec![Pair::new("do you do", "diya do")]);
        assert_eq!(base.words, vec![Pair::new("my", "ma"), Pair::new("my", "ma")]);
        assert_eq!(base.characters, vec![Pair::new("t", "d")]);
        assert_eq!(base.len(), 4);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let parsed: TranslationGroup = serde_json::from_str(r#"{"words": [["here", "'ere"]]}"#).unwrap();
        assert!(parsed.phrases.is_empty());
        assert!(parsed.characters.is_empty());
        assert_eq!(parsed.pairs(Tier::Words), &[Pair::new("here", "'ere")]);

        let empty: TranslationGroup = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn mapping_follows_direction() {
        let g = group(&[], &[("this", "dis")], &[]);
        let forward = g.derive_mapping(Direction::AToB);
        let reverse = g.derive_mapping(Direction::BToA);

        assert_eq!(forward.get(Tier::Words, "this"), Some("dis"));
        assert_eq!(forward.get(Tier::Words, "dis"), None);
        assert_eq!(reverse.get(Tier::Words, "dis"), Some("this"));
    }

    #[test]
    fn later_duplicate_overwrites() {
        let g = group(&[], &[], &[("d", "th"), ("d", "t")]);
        let mapping = g.derive_mapping(Direction::AToB);
        assert_eq!(mapping.get(Tier::Characters, "d"), Some("t"));
        assert_eq!(mapping.tier(Tier::Characters).len(), 1);
    }

    #[test]
    fn keys_are_lowercased_values_keep_case() {
        let g = group(&[], &[("Captain", "Cap'n"), ("captain", "cap'n")], &[]);
        let mapping = g.derive_mapping(Direction::AToB);
        assert_eq!(mapping.get(Tier::Words, "captain"), Some("cap'n"));

        let g = group(&[("I am", "I'ma")], &[], &[]);
        let mapping = g.derive_mapping(Direction::AToB);
        assert_eq!(mapping.get(Tier::Phrases, "i am"), Some("I'ma"));
    }

    #[test]
    fn empty_keys_are_never_registered() {
        let g = group(&[], &[("", "x"), ("y", "")], &[]);
        let forward = g.derive_mapping(Direction::AToB);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward.get(Tier::Words, "y"), Some(""));

        let reverse = g.derive_mapping(Direction::BToA);
        assert_eq!(reverse.len(), 1);
        assert_eq!(reverse.get(Tier::Words, "x"), Some(""));
    }

    #[test]
    fn config_merges_seed_sources_then_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"words": [["here", "'ere"]]}}"#).unwrap();

        let config = GroupConfig {
            seed: Some(group(&[], &[("my", "ma")], &[])),
            sources: vec![file.path().to_path_buf()],
            data: vec![group(&[], &[("this", "dis")], &[])],
        };
        let built = TranslationGroup::from_config(config).unwrap();
        assert_eq!(
            built.words,
            vec![Pair::new("my", "ma"), Pair::new("here", "'ere"), Pair::new("this", "dis")]
        );
    }

    #[test]
    fn config_with_missing_source_fails() {
        let config = GroupConfig::from_source("/definitely/not/here.json");
        assert!(matches!(
            TranslationGroup::from_config(config),
            Err(crate::error::ConverseError::Io(_))
        ));
    }
}

use crate::core::group::{DirectionalMapping, TranslationGroup};
use crate::core::trie::PrefixIndex;
use crate::core::types::{Direction, Tier};
use tracing::{debug, trace};

/// The best substitution available at the start of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentMatch<'a> {
    pub tier: Tier,
    /// Bytes of the segment covered by the matched key.
    pub len: usize,
    pub value: &'a str,
}

/// Greedy segment translator for one direction of a `TranslationGroup`.
///
/// The mapping and its prefix indexes are built once in `new` and never
/// change afterwards, so a single translator can be shared across threads.
#[derive(Debug, Clone)]
pub struct Translator {
    direction: Direction,
    group: TranslationGroup,
    mapping: DirectionalMapping,
    indexes: [PrefixIndex; 3],
}

impl Translator {
    pub fn new(group: TranslationGroup, direction: Direction) -> Self {
        let mapping = group.derive_mapping(direction);
        let indexes = Tier::PRIORITY.map(|tier| mapping.tier(tier).iter().collect::<PrefixIndex>());
        debug!(
            %direction,
            phrases = indexes[Tier::Phrases.index()].len(),
            words = indexes[Tier::Words.index()].len(),
            characters = indexes[Tier::Characters.index()].len(),
            "translator ready"
        );
        Self { direction, group, mapping, indexes }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn group(&self) -> &TranslationGroup {
        &self.group
    }

    pub fn mapping(&self) -> &DirectionalMapping {
        &self.mapping
    }

    /// Goes through the tiers in order phrases > words > characters; the first
    /// tier with any key matching the start of `segment` wins, and within it
    /// the longest key.
    pub fn best_match(&self, segment: &str) -> Option<SegmentMatch<'_>> {
        Tier::PRIORITY.into_iter().find_map(|tier| {
            self.indexes[tier.index()]
                .longest_match(segment)
                .map(|(len, value)| SegmentMatch { tier, len, value })
        })
    }

    /// Replaces every matched segment of `text`; characters no key covers are
    /// copied through one at a time.
    pub fn translate(&self, text: &str) -> String {
        let mut translation = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(first) = rest.chars().next() {
            match self.best_match(rest) {
                Some(found) => {
                    trace!(
                        tier = found.tier.name(),
                        source = &rest[..found.len],
                        target = found.value,
                        "segment matched"
                    );
                    push_with_case(&mut translation, found.value, first.is_uppercase());
                    rest = &rest[found.len..];
                }
                None => {
                    translation.push(first);
                    rest = &rest[first.len_utf8()..];
                }
            }
        }

        translation
    }
}

/// Appends `value`, uppercasing only its first character when `capitalize`.
fn push_with_case(out: &mut String, value: &str, capitalize: bool) {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if capitalize => {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        _ => out.push_str(value),
    }
}

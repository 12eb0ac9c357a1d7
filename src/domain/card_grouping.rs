use super::card::Card;
use indexmap::IndexMap;

/// セット名 → 種別名 → カード列 の2段階マップ。
///
/// キーは初めて現れたときに作られ、その後は消えない。
/// カード列はCSVの行順、セットと種別は初出順を保つ。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CardGrouping {
    sets: IndexMap<String, IndexMap<String, Vec<Card>>>,
}

impl CardGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, set: &str, card_type: &str, card: Card) {
        self.sets
            .entry(set.to_string())
            .or_default()
            .entry(card_type.to_string())
            .or_default()
            .push(card);
    }

    pub fn get(&self, set: &str, card_type: &str) -> Option<&[Card]> {
        self.sets
            .get(set)
            .and_then(|types| types.get(card_type))
            .map(Vec::as_slice)
    }

    /// すべての (セット名, 種別名, カード列) を挿入順で返す。
    pub fn groups(&self) -> impl Iterator<Item = (&str, &str, &[Card])> + '_ {
        self.sets.iter().flat_map(|(set, types)| {
            types
                .iter()
                .map(move |(card_type, cards)| (set.as_str(), card_type.as_str(), cards.as_slice()))
        })
    }

    pub fn group_count(&self) -> usize {
        self.sets.values().map(IndexMap::len).sum()
    }

    pub fn card_count(&self) -> usize {
        self.groups().map(|(_, _, cards)| cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// グループの出力ファイル名 (`<set>-<type>.json`)。
pub fn group_file_name(set: &str, card_type: &str) -> String {
    format!("{}-{}.json", set, card_type)
}

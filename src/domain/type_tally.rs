use super::card_type::CardType;
use strum::IntoEnumIterator;

/// カード種別ごとの件数カウンタ。
///
/// 認識できない種別名は数えない。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeTally {
    agent: usize,
    engine: usize,
    anchor: usize,
    conflict: usize,
    aspect: usize,
}

impl TypeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// 種別名を1件記録する。
    ///
    /// # 戻り値
    /// * `Some(CardType)`: 認識済みの種別で、カウントを1増やした場合。
    /// * `None`: 認識できない種別名 (カウントは変わらない)。
    pub fn record(&mut self, type_name: &str) -> Option<CardType> {
        let card_type = CardType::parse(type_name)?;
        *self.slot_mut(card_type) += 1;
        Some(card_type)
    }

    pub fn count(&self, card_type: CardType) -> usize {
        match card_type {
            CardType::Agent => self.agent,
            CardType::Engine => self.engine,
            CardType::Anchor => self.anchor,
            CardType::Conflict => self.conflict,
            CardType::Aspect => self.aspect,
        }
    }

    /// `CardType` の宣言順に (種別, 件数) を返す。
    pub fn iter(&self) -> impl Iterator<Item = (CardType, usize)> + '_ {
        CardType::iter().map(move |t| (t, self.count(t)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| n).sum()
    }

    fn slot_mut(&mut self, card_type: CardType) -> &mut usize {
        match card_type {
            CardType::Agent => &mut self.agent,
            CardType::Engine => &mut self.engine,
            CardType::Anchor => &mut self.anchor,
            CardType::Conflict => &mut self.conflict,
            CardType::Aspect => &mut self.aspect,
        }
    }
}

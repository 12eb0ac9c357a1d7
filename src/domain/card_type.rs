use std::str::FromStr;

/// CSVの2列目に現れる、認識済みのカード種別。
///
/// 文字列との対応は大文字小文字を区別する完全一致。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum CardType {
    Agent,
    Engine,
    Anchor,
    Conflict,
    Aspect,
}

impl CardType {
    /// 種別名を解析する。認識できない名前は `None`。
    pub fn parse(name: &str) -> Option<Self> {
        CardType::from_str(name).ok()
    }

    /// 集計表示用の複数形ラベル (例: "Agents")。
    pub fn plural_label(&self) -> String {
        format!("{}s", self.as_ref())
    }
}

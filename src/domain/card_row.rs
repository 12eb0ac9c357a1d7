use super::card::{Card, CardError};
use csv::StringRecord;
use thiserror::Error;

/// CSVの1行を、セット名・種別名・面のテキストに分解したもの。
///
/// 列の並び: `set, type, side1, side2[, side3, side4]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    line: u64,
    set: String,
    card_type: String,
    sides: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("{line} 行目: セット名または種別名の列がありません")]
    MissingField { line: u64 },

    #[error("{line} 行目: {source}")]
    InvalidCard {
        line: u64,
        #[source]
        source: CardError,
    },
}

impl CardRow {
    /// レコードから行を組み立てる。`line` は1始まりの行番号。
    ///
    /// 面が4列あり、3列目と4列目がどちらも空文字列の場合は2面カードの行として扱い、
    /// 先頭2面だけを残す。
    pub fn from_record(record: &StringRecord, line: u64) -> Result<Self, RowError> {
        let (set, card_type) = match (record.get(0), record.get(1)) {
            (Some(set), Some(card_type)) => (set, card_type),
            _ => return Err(RowError::MissingField { line }),
        };

        let mut sides: Vec<String> = record.iter().skip(2).map(str::to_string).collect();
        if sides.len() == 4 && sides[2].is_empty() && sides[3].is_empty() {
            sides.truncate(2);
        }

        Ok(Self {
            line,
            set: set.to_string(),
            card_type: card_type.to_string(),
            sides,
        })
    }

    pub fn to_card(&self) -> Result<Card, RowError> {
        Card::new(&self.sides).map_err(|source| RowError::InvalidCard {
            line: self.line,
            source,
        })
    }

    pub fn line(&self) -> u64 {
        self.line
    }
    pub fn set(&self) -> &str {
        &self.set
    }
    pub fn card_type(&self) -> &str {
        &self.card_type
    }
    pub fn sides(&self) -> &[String] {
        &self.sides
    }
}

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

// --- 構造体定義 ---

/// 2面または4面のテキストを持つカード。
///
/// 面の数は生成時に決まり、以後変更されない。
/// JSONへは `Side1`〜`Side4` のキーを持つオブジェクトとして出力される
/// (2面カードは `Side3`, `Side4` を持たない)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Card {
    #[serde(rename_all = "PascalCase")]
    TwoSided { side1: String, side2: String },
    #[serde(rename_all = "PascalCase")]
    FourSided {
        side1: String,
        side2: String,
        side3: String,
        side4: String,
    },
}

// --- エラー定義 ---

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// 面の数が2でも4でもない場合。
    #[error("カードの面の数は2または4である必要があります (受け取った数: {0})")]
    InvalidSideCount(usize),
}

// --- 実装ブロック ---

impl Card {
    /// 面のテキスト列からカードを生成する。
    ///
    /// # 戻り値
    /// * 要素数4: `Card::FourSided`
    /// * 要素数2: `Card::TwoSided`
    /// * それ以外: `Err(CardError::InvalidSideCount)`
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, CardError> {
        match sides {
            [s1, s2, s3, s4] => Ok(Card::FourSided {
                side1: s1.as_ref().to_string(),
                side2: s2.as_ref().to_string(),
                side3: s3.as_ref().to_string(),
                side4: s4.as_ref().to_string(),
            }),
            [s1, s2] => Ok(Card::TwoSided {
                side1: s1.as_ref().to_string(),
                side2: s2.as_ref().to_string(),
            }),
            _ => Err(CardError::InvalidSideCount(sides.len())),
        }
    }

    /// 面の数 (2 または 4)。
    pub fn side_count(&self) -> usize {
        match self {
            Card::TwoSided { .. } => 2,
            Card::FourSided { .. } => 4,
        }
    }

    /// 存在する面を順番どおりに返す。
    pub fn sides(&self) -> Vec<&str> {
        match self {
            Card::TwoSided { side1, side2 } => vec![side1.as_str(), side2.as_str()],
            Card::FourSided {
                side1,
                side2,
                side3,
                side4,
            } => vec![
                side1.as_str(),
                side2.as_str(),
                side3.as_str(),
                side4.as_str(),
            ],
        }
    }

    /// 渡された乱数源を使い、面を1つ等確率で選ぶ。
    pub fn random_side<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let n = rng.gen_range(0..self.side_count());
        match (self, n) {
            (Card::TwoSided { side1, .. }, 0) => side1.as_str(),
            (Card::TwoSided { side2, .. }, _) => side2.as_str(),
            (Card::FourSided { side1, .. }, 0) => side1.as_str(),
            (Card::FourSided { side2, .. }, 1) => side2.as_str(),
            (Card::FourSided { side3, .. }, 2) => side3.as_str(),
            (Card::FourSided { side4, .. }, _) => side4.as_str(),
        }
    }

    /// スレッドローカルの乱数源 (初回に一度だけシードされる) で面を選ぶ。
    pub fn random_side_thread(&self) -> &str {
        self.random_side(&mut rand::thread_rng())
    }
}

// --- テストモジュール ---

//! CSVの行をカードに変換し、(セット, 種別) ごとのJSONファイルに書き出すパイプライン。
//!
//! 処理は2段階に分かれる。
//! 1. `CardConverter` が全行を読み込み、`Conversion` を作る (行の読み込み段階)。
//! 2. `Conversion::write_to` が各グループをJSONファイルとして保存する (書き出し段階)。
//!
//! `Conversion` は全行の読み込みに成功したときだけ得られるため、
//! 途中の行で致命的なエラーが起きた場合はファイルが1つも書かれない。

use super::card_grouping::CardGrouping;
use super::card_row::{CardRow, RowError};
use super::json_file::{JsonFile, JsonFileError};
use super::paths::output_directory::OutputDirectory;
use super::type_tally::TypeTally;
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("不正な行があります: {0}")]
    Row(#[from] RowError),

    #[error("CSVの読み取りに失敗しました: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSONファイルの出力に失敗しました: {0}")]
    Json(#[from] JsonFileError),

    /// 異なる (セット, 種別) の組が同じファイル名になった場合。
    #[error("複数のグループが同じファイル名 {file_name} になります")]
    FileNameCollision { file_name: String },
}

/// 認識できない種別名を持つ行の記録。処理は止めない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedCardType {
    pub line: u64,
    pub set: String,
    pub type_name: String,
}

/// 行の読み込み段階の状態。
#[derive(Debug, Default)]
pub struct CardConverter {
    grouping: CardGrouping,
    tally: TypeTally,
    unrecognized: Vec<UnrecognizedCardType>,
}

impl CardConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1行分を取り込む。
    ///
    /// カードを作れない行は `Err` を返す。種別名が認識できない行は警告を出した上で、
    /// その種別名のままグループに追加する。
    pub fn ingest(&mut self, row: &CardRow) -> Result<(), RowError> {
        let card = row.to_card()?;

        if self.tally.record(row.card_type()).is_none() {
            tracing::warn!(
                line = row.line(),
                set = row.set(),
                card_type = row.card_type(),
                "Line doesn't have a known card type"
            );
            self.unrecognized.push(UnrecognizedCardType {
                line: row.line(),
                set: row.set().to_string(),
                type_name: row.card_type().to_string(),
            });
        }

        self.grouping.push(row.set(), row.card_type(), card);
        Ok(())
    }

    /// リーダーの全レコードを読み込み、書き出し段階へ移る。
    ///
    /// 最初の致命的なエラーでそのまま返る。
    pub fn read_from<R: Read>(reader: &mut csv::Reader<R>) -> Result<Conversion, ConvertError> {
        let mut converter = Self::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 1);
            let row = CardRow::from_record(&record, line)?;
            converter.ingest(&row)?;
        }
        Ok(converter.finish())
    }

    pub fn finish(self) -> Conversion {
        for (set, card_type, cards) in self.grouping.groups() {
            tracing::debug!(set, card_type, cards = cards.len(), "group collected");
        }
        Conversion {
            grouping: self.grouping,
            tally: self.tally,
            unrecognized: self.unrecognized,
        }
    }
}

/// 全行を読み終えた結果。書き出し段階。
#[derive(Debug)]
pub struct Conversion {
    grouping: CardGrouping,
    tally: TypeTally,
    unrecognized: Vec<UnrecognizedCardType>,
}

impl Conversion {
    pub fn grouping(&self) -> &CardGrouping {
        &self.grouping
    }
    pub fn tally(&self) -> &TypeTally {
        &self.tally
    }
    pub fn unrecognized(&self) -> &[UnrecognizedCardType] {
        &self.unrecognized
    }

    /// すべてのグループを `<set>-<type>.json` として出力ディレクトリへ書き出す。
    ///
    /// 先に全グループのJSONを生成し、ファイル名の妥当性と重複を確認してから書き出す。
    /// そのため名前の問題では1つも書かれない。書き出し中の失敗では、書き出し済みのファイルは残る。
    pub fn write_to(&self, dir: &OutputDirectory) -> Result<Vec<PathBuf>, ConvertError> {
        let files = self.render_files()?;

        let mut written = Vec::with_capacity(files.len());
        for (file, cards) in &files {
            let path = file.save_in(dir)?;
            tracing::info!(path = %path.display(), cards, "wrote group");
            written.push(path);
        }
        Ok(written)
    }

    /// 各グループの `JsonFile` とカード枚数を初出順で返す。
    fn render_files(&self) -> Result<Vec<(JsonFile, usize)>, ConvertError> {
        let mut seen = HashSet::new();
        let mut files = Vec::with_capacity(self.grouping.group_count());
        for (set, card_type, cards) in self.grouping.groups() {
            let file = JsonFile::create_file(set, card_type, cards)?;
            if !seen.insert(file.file_name.clone()) {
                return Err(ConvertError::FileNameCollision {
                    file_name: file.file_name,
                });
            }
            files.push((file, cards.len()));
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Card, CardError};
    use crate::domain::card_type::CardType;
    use crate::domain::paths::csv_file_path::card_csv_reader_builder;
    use std::fs;
    use tempfile::tempdir;

    fn convert(data: &str) -> Result<Conversion, ConvertError> {
        let mut reader = card_csv_reader_builder().from_reader(data.as_bytes());
        CardConverter::read_from(&mut reader)
    }

    #[test]
    fn mixed_two_and_four_sided_rows_share_a_group_in_order() {
        let conversion = convert("Base,Agent,a1,a2\nBase,Agent,b1,b2,b3,b4\n").unwrap();
        let cards = conversion.grouping().get("Base", "Agent").unwrap();
        assert_eq!(
            cards,
            &[
                Card::new(&["a1", "a2"]).unwrap(),
                Card::new(&["b1", "b2", "b3", "b4"]).unwrap(),
            ]
        );
        assert_eq!(conversion.tally().count(CardType::Agent), 2);
    }

    #[test]
    fn unknown_type_is_reported_but_still_grouped() {
        let conversion = convert("Base,Unknown,u1,u2\nBase,Engine,e1,e2\n").unwrap();

        assert_eq!(
            conversion.unrecognized(),
            &[UnrecognizedCardType {
                line: 1,
                set: "Base".into(),
                type_name: "Unknown".into(),
            }]
        );
        assert_eq!(conversion.grouping().get("Base", "Unknown").map(<[Card]>::len), Some(1));
        assert_eq!(conversion.tally().total(), 1);
    }

    #[test]
    fn three_sides_abort_with_the_offending_line() {
        let err = convert("Base,Agent,x,y\nBase,Agent,a1,a2,a3\n").unwrap_err();
        match err {
            ConvertError::Row(RowError::InvalidCard { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, CardError::InvalidSideCount(3));
            }
            other => panic!("予期せぬエラーが返されました: {:?}", other),
        }
    }

    #[test]
    fn empty_input_produces_no_groups() {
        let conversion = convert("").unwrap();
        assert!(conversion.grouping().is_empty());
        assert_eq!(conversion.tally().total(), 0);
    }

    #[test]
    fn write_to_creates_one_file_per_group() {
        let dir = tempdir().expect("Failed to create temp directory");
        let out = OutputDirectory::prepare(dir.path()).unwrap();
        let conversion = convert("Base,Agent,x,y\nSciFi,Engine,p,q\n").unwrap();

        let written = conversion.write_to(&out).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("Base-Agent.json"),
                dir.path().join("SciFi-Engine.json"),
            ]
        );
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Base-Agent.json", "SciFi-Engine.json"]);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("SciFi-Engine.json")).unwrap())
                .unwrap();
        assert_eq!(value, serde_json::json!([{ "Side1": "p", "Side2": "q" }]));
    }

    #[test]
    fn invalid_utf8_is_a_csv_error() {
        let data: &[u8] = b"Base,Agent,\xff,b\n";
        let mut reader = card_csv_reader_builder().from_reader(data);
        match CardConverter::read_from(&mut reader) {
            Err(ConvertError::Csv(_)) => {}
            other => panic!("予期せぬ結果: {:?}", other.map(|c| c.grouping().card_count())),
        }
    }

    /// ("A-B", "C") と ("A", "B-C") はどちらも A-B-C.json になる。
    #[test]
    fn colliding_file_names_abort_before_writing() {
        let dir = tempdir().expect("Failed to create temp directory");
        let out = OutputDirectory::prepare(dir.path()).unwrap();
        let conversion = convert("A-B,C,x1,x2\nA,B-C,y1,y2\n").unwrap();
        assert_eq!(conversion.grouping().group_count(), 2);

        match conversion.write_to(&out) {
            Err(ConvertError::FileNameCollision { file_name }) => {
                assert_eq!(file_name, "A-B-C.json")
            }
            other => panic!("予期せぬ結果: {:?}", other),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn unsafe_set_name_writes_nothing() {
        let dir = tempdir().expect("Failed to create temp directory");
        let out_path = dir.path().join("out");
        let out = OutputDirectory::prepare(&out_path).unwrap();
        let conversion = convert("Base,Agent,x,y\n../escaped,Agent,a,b\n").unwrap();

        let err = conversion.write_to(&out).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::Json(JsonFileError::UnsafeName { .. })
        ));
        assert_eq!(fs::read_dir(&out_path).unwrap().count(), 0);
        assert!(!dir.path().join("escaped-Agent.json").exists());
    }
}

pub mod card;
pub mod card_grouping;
pub mod card_row;
pub mod card_type;
pub mod converter;
pub mod json_file;
pub mod paths;
pub mod type_tally;

// --- public re-exports ---
pub use card::{Card, CardError};
pub use card_type::CardType;
pub use converter::{CardConverter, Conversion, ConvertError};

//! OTA Search Common Library
//!
//! CLIと対話モードで共有される型と、明細テキストの解析・OTA名照合ロジック

pub mod types;
pub mod extractor;
pub mod normalizer;
pub mod matcher;
pub mod lookup;

pub use types::{Annotation, ExtractedFields, OtaDetails, OtaRecord, RowDetails, SearchOutcome};
pub use extractor::extract_key_values;
pub use normalizer::normalize_name;
pub use matcher::{best_match, distinct_names, find_matches, search};
pub use lookup::{collect_details, rows_for, values_for_key};

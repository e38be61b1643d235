//! Load the word and metadata fixtures from disk.
//!
//! A dataset directory holds up to three files:
//! - `metadata.json`: tokenizer, alias and model tables
//! - `words.tsv`: word and single-token safety flags
//! - `words-extended.tsv`: word and per-tokenizer token cost
//!
//! Each file is read and parsed completely before anything is returned, so
//! a failed load never leaves a partial table behind.

use crate::mint::{ExtendedMintId, MintId, SimpleMintId};
use crate::variant::{Extended, Simple, Variant};
use mintid_core::{CostTable, Metadata, MintIdError, Result, WordTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Metadata file name inside a dataset directory.
pub const METADATA_FILE: &str = "metadata.json";
/// Flag table file name inside a dataset directory.
pub const WORDS_FILE: &str = "words.tsv";
/// Cost table file name inside a dataset directory.
pub const EXTENDED_WORDS_FILE: &str = "words-extended.tsv";

/// Dataset loader - reads fixtures from a directory.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load `metadata.json`, or the builtin metadata when the file is absent.
    pub fn load_metadata(dir: &Path) -> Result<Metadata> {
        let path = dir.join(METADATA_FILE);
        if !path.exists() {
            log::debug!("{} not found, using builtin metadata", path.display());
            return Metadata::builtin();
        }
        let metadata = Metadata::from_json(&read(&path)?)?;
        log::debug!(
            "loaded metadata from {}: {} tokenizers",
            path.display(),
            metadata.len()
        );
        Ok(metadata)
    }

    /// Load the flag table.
    pub fn load_words(dir: &Path) -> Result<WordTable> {
        let path = dir.join(WORDS_FILE);
        let table = WordTable::parse(&read(&path)?)?;
        log::debug!("loaded {} words from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load the cost table.
    pub fn load_costs(dir: &Path) -> Result<CostTable> {
        let path = dir.join(EXTENDED_WORDS_FILE);
        let table = CostTable::parse(&read(&path)?)?;
        log::debug!(
            "loaded {} words x {} tokenizers from {}",
            table.len(),
            table.width(),
            path.display()
        );
        Ok(table)
    }

    /// Metadata and flag table only, as a single-token facade.
    pub fn load_simple(dir: &Path) -> Result<SimpleMintId> {
        MintId::from_dir(dir)
    }

    /// Metadata and cost table only, as a token-budget facade.
    pub fn load_extended(dir: &Path) -> Result<ExtendedMintId> {
        MintId::from_dir(dir)
    }

    /// Load every fixture in the directory.
    pub fn load(dir: &Path) -> Result<Dataset> {
        Dataset::new(
            Self::load_metadata(dir)?,
            Self::load_words(dir)?,
            Self::load_costs(dir)?,
        )
    }
}

/// A complete, validated dataset shared by both facades.
#[derive(Debug, Clone)]
pub struct Dataset {
    metadata: Arc<Metadata>,
    words: Arc<WordTable>,
    costs: Arc<CostTable>,
}

impl Dataset {
    /// Assemble a dataset from in-memory tables.
    pub fn new(metadata: Metadata, words: WordTable, costs: CostTable) -> Result<Self> {
        Extended::check_table(&costs, &metadata)?;
        Ok(Self {
            metadata: Arc::new(metadata),
            words: Arc::new(words),
            costs: Arc::new(costs),
        })
    }

    pub fn metadata(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    /// Single-token facade over this dataset.
    pub fn simple(&self) -> Result<MintId<Simple>> {
        MintId::new(Arc::clone(&self.metadata), Arc::clone(&self.words))
    }

    /// Token-budget facade over this dataset.
    pub fn extended(&self) -> Result<MintId<Extended>> {
        MintId::new(Arc::clone(&self.metadata), Arc::clone(&self.costs))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| MintIdError::Io {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MintIdOptions;
    use std::fs;

    fn temp_dataset(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mintid_test_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_dataset() {
        let dir = temp_dataset("load");
        fs::write(dir.join(WORDS_FILE), "# word\tflags\nalpha\t15\nbravo\t1\n").unwrap();
        fs::write(
            dir.join(EXTENDED_WORDS_FILE),
            "alpha\t1\t1\t1\t1\nbravo\t1\t2\t2\t2\n",
        )
        .unwrap();

        let dataset = DatasetLoader::load(&dir).unwrap();
        assert_eq!(dataset.metadata().len(), 4);

        let simple = dataset.simple().unwrap();
        assert_eq!(simple.wordlist(&MintIdOptions::new()).unwrap().len(), 1);
        let extended = dataset.extended().unwrap();
        let options = MintIdOptions::new().max_tokens(2);
        assert_eq!(extended.wordlist(&options).unwrap().len(), 2);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_load_single_variant() {
        let dir = temp_dataset("variant");
        fs::write(dir.join(WORDS_FILE), "alpha\t15\nbravo\t15\ncharlie\t2\n").unwrap();

        let simple = DatasetLoader::load_simple(&dir).unwrap();
        assert_eq!(simple.wordlist(&MintIdOptions::new()).unwrap().len(), 2);

        // the cost table is only read for the extended facade
        match DatasetLoader::load_extended(&dir) {
            Err(MintIdError::Io { path, .. }) => assert!(path.ends_with(EXTENDED_WORDS_FILE)),
            Err(other) => panic!("expected Io error, got {:?}", other),
            Ok(_) => panic!("expected Io error"),
        }

        fs::write(
            dir.join(EXTENDED_WORDS_FILE),
            "alpha\t1\t1\t1\t1\nbravo\t2\t1\t1\t1\n",
        )
        .unwrap();
        let extended = DatasetLoader::load_extended(&dir).unwrap();
        let options = MintIdOptions::new().tokenizer("claude").max_tokens(2);
        assert_eq!(extended.wordlist(&options).unwrap().len(), 2);
        assert_eq!(extended.wordlist(&MintIdOptions::new()).unwrap().len(), 1);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_custom_metadata() {
        let dir = temp_dataset("metadata");
        fs::write(
            dir.join(METADATA_FILE),
            r#"{"tokenizers": ["a", "b"], "models": {"m": "b"}}"#,
        )
        .unwrap();

        let metadata = DatasetLoader::load_metadata(&dir).unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.resolve_model("m").unwrap(), 1);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = temp_dataset("missing");
        match DatasetLoader::load_words(&dir) {
            Err(MintIdError::Io { path, .. }) => assert!(path.ends_with(WORDS_FILE)),
            other => panic!("expected Io error, got {:?}", other.map(|t| t.len())),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_corrupt_file_fails_whole_load() {
        let dir = temp_dataset("corrupt");
        fs::write(dir.join(WORDS_FILE), "alpha\t15\nbravo\tnope\n").unwrap();
        assert!(matches!(
            DatasetLoader::load_words(&dir),
            Err(MintIdError::Parse { line: 2, .. })
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let metadata = Metadata::builtin().unwrap();
        let costs = CostTable::parse("alpha\t1\t1\n").unwrap();
        assert!(Dataset::new(metadata, WordTable::default(), costs).is_err());
    }
}

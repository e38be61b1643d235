//! Name resolution: user-facing selectors to filter criteria.

use crate::data::{Metadata, TokenizerMask};
use crate::error::Result;

/// Which tokenizers a caller wants words to be safe for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Every tokenizer in the metadata
    #[default]
    Universal,
    /// Canonical tokenizer names or aliases
    Tokenizers(Vec<String>),
    /// Model names, each mapping to one tokenizer
    Models(Vec<String>),
}

impl Selector {
    /// Build a selector from optional tokenizer and model lists.
    ///
    /// A non-empty tokenizer list wins outright and the models are ignored,
    /// not merged. Empty lists count as absent.
    pub fn from_parts<T, M>(tokenizers: &[T], models: &[M]) -> Self
    where
        T: AsRef<str>,
        M: AsRef<str>,
    {
        if !tokenizers.is_empty() {
            Self::Tokenizers(tokenizers.iter().map(|s| s.as_ref().to_string()).collect())
        } else if !models.is_empty() {
            Self::Models(models.iter().map(|s| s.as_ref().to_string()).collect())
        } else {
            Self::Universal
        }
    }

    /// Selector for a single tokenizer name or alias.
    pub fn tokenizer(name: impl Into<String>) -> Self {
        Self::Tokenizers(vec![name.into()])
    }

    /// Selector for a single model name.
    pub fn model(name: impl Into<String>) -> Self {
        Self::Models(vec![name.into()])
    }
}

/// Resolves selectors against a metadata table.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    metadata: &'a Metadata,
}

impl<'a> Resolver<'a> {
    pub fn new(metadata: &'a Metadata) -> Self {
        Self { metadata }
    }

    /// Tokenizer indices named by `selector`, in selector order.
    ///
    /// Fails on the first unknown name.
    pub fn resolve(&self, selector: &Selector) -> Result<Vec<usize>> {
        match selector {
            Selector::Universal => Ok((0..self.metadata.len()).collect()),
            Selector::Tokenizers(names) => names
                .iter()
                .map(|name| self.metadata.resolve_tokenizer(name))
                .collect(),
            Selector::Models(names) => names
                .iter()
                .map(|name| self.metadata.resolve_model(name))
                .collect(),
        }
    }

    /// Bitmask criterion for the flags wordlist.
    pub fn mask(&self, selector: &Selector) -> Result<TokenizerMask> {
        if let Selector::Universal = selector {
            return Ok(self.metadata.universal_mask());
        }
        Ok(self
            .resolve(selector)?
            .into_iter()
            .fold(TokenizerMask::EMPTY, |mask, i| {
                mask | TokenizerMask::from_index(i)
            }))
    }

    /// Cost-column criterion for the extended wordlist, sorted and deduplicated.
    pub fn indices(&self, selector: &Selector) -> Result<Vec<usize>> {
        let mut indices = self.resolve(selector)?;
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MintIdError;
    use proptest::prelude::*;

    fn mask(meta: &Metadata, selector: Selector) -> u32 {
        Resolver::new(meta).mask(&selector).unwrap().bits()
    }

    #[test]
    fn test_universal() {
        let meta = Metadata::builtin().unwrap();
        assert_eq!(mask(&meta, Selector::Universal), 15);
        assert_eq!(
            Resolver::new(&meta).indices(&Selector::Universal).unwrap(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_model_masks() {
        let meta = Metadata::builtin().unwrap();
        assert_eq!(mask(&meta, Selector::model("claude-opus-4-6")), 1);
        assert_eq!(mask(&meta, Selector::model("claude-sonnet-4-5")), 1);
        assert_eq!(mask(&meta, Selector::model("claude-3-opus")), 1);
        assert_eq!(mask(&meta, Selector::model("gpt-4")), 2);
        assert_eq!(mask(&meta, Selector::model("gpt-4-turbo")), 2);
        assert_eq!(mask(&meta, Selector::model("gpt-3.5-turbo")), 2);
        assert_eq!(mask(&meta, Selector::model("gpt-4o")), 4);
        assert_eq!(mask(&meta, Selector::model("o1")), 4);
        assert_eq!(mask(&meta, Selector::model("o3")), 4);
        assert_eq!(mask(&meta, Selector::model("gpt-5")), 4);
        assert_eq!(mask(&meta, Selector::model("gpt-2")), 8);
    }

    #[test]
    fn test_multiple_models_combine() {
        let meta = Metadata::builtin().unwrap();
        let selector = Selector::Models(vec!["claude-opus-4-6".into(), "gpt-4".into()]);
        assert_eq!(mask(&meta, selector.clone()), 3);
        assert_eq!(Resolver::new(&meta).indices(&selector).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_tokenizer_masks() {
        let meta = Metadata::builtin().unwrap();
        assert_eq!(mask(&meta, Selector::tokenizer("claude")), 1);
        assert_eq!(mask(&meta, Selector::tokenizer("cl100k_base")), 2);
        assert_eq!(mask(&meta, Selector::tokenizer("o200k_base")), 4);
        assert_eq!(mask(&meta, Selector::tokenizer("gpt2")), 8);
        assert_eq!(mask(&meta, Selector::tokenizer("o200k_harmony")), 4);
        assert_eq!(mask(&meta, Selector::tokenizer("p50k_base")), 8);
        assert_eq!(mask(&meta, Selector::tokenizer("r50k_base")), 8);
    }

    #[test]
    fn test_multiple_tokenizers_combine() {
        let meta = Metadata::builtin().unwrap();
        let selector = Selector::Tokenizers(vec!["claude".into(), "o200k_base".into()]);
        assert_eq!(mask(&meta, selector), 5);
    }

    #[test]
    fn test_alias_and_canonical_deduplicate() {
        let meta = Metadata::builtin().unwrap();
        let selector = Selector::Tokenizers(vec![
            "gpt2".into(),
            "p50k_base".into(),
            "claude".into(),
        ]);
        assert_eq!(Resolver::new(&meta).indices(&selector).unwrap(), vec![0, 3]);
        assert_eq!(mask(&meta, selector), 9);
    }

    #[test]
    fn test_tokenizer_takes_precedence() {
        let meta = Metadata::builtin().unwrap();
        let selector = Selector::from_parts(&["claude"], &["gpt-4"]);
        assert_eq!(selector, Selector::tokenizer("claude"));
        assert_eq!(mask(&meta, selector), 1);
    }

    #[test]
    fn test_precedence_ignores_invalid_model() {
        let meta = Metadata::builtin().unwrap();
        let selector = Selector::from_parts(&["gpt2"], &["nonexistent-model"]);
        assert_eq!(mask(&meta, selector), 8);
    }

    #[test]
    fn test_empty_lists_are_universal() {
        let empty: [&str; 0] = [];
        assert_eq!(Selector::from_parts(&empty, &empty), Selector::Universal);
        assert_eq!(
            Selector::from_parts(&empty, &["gpt-4"]),
            Selector::model("gpt-4")
        );
    }

    #[test]
    fn test_unknown_names_fail() {
        let meta = Metadata::builtin().unwrap();
        let resolver = Resolver::new(&meta);
        assert!(matches!(
            resolver.mask(&Selector::model("nonexistent-model")),
            Err(MintIdError::UnknownModel(_))
        ));
        assert!(matches!(
            resolver.mask(&Selector::tokenizer("nonexistent")),
            Err(MintIdError::UnknownTokenizer { .. })
        ));
        let mixed = Selector::Tokenizers(vec!["claude".into(), "nope".into()]);
        match resolver.indices(&mixed) {
            Err(MintIdError::UnknownTokenizer { name, .. }) => assert_eq!(name, "nope"),
            other => panic!("expected UnknownTokenizer, got {:?}", other),
        }
    }

    proptest! {
        /// Whatever the model list, a tokenizer list decides the result alone.
        #[test]
        fn prop_tokenizer_overrides_model(
            tokenizer in prop::sample::select(vec!["claude", "cl100k_base", "o200k_base", "gpt2", "r50k_base"]),
            models in prop::collection::vec("[a-z0-9.-]{1,12}", 0..4)
        ) {
            let meta = Metadata::builtin().unwrap();
            let resolver = Resolver::new(&meta);
            let both = Selector::from_parts(&[tokenizer], models.as_slice());
            let alone = Selector::tokenizer(tokenizer);
            prop_assert_eq!(resolver.mask(&both).unwrap(), resolver.mask(&alone).unwrap());
            prop_assert_eq!(resolver.indices(&both).unwrap(), resolver.indices(&alone).unwrap());
        }

        /// A mask has exactly the bits of the resolved indices.
        #[test]
        fn prop_mask_matches_indices(
            names in prop::collection::vec(
                prop::sample::select(vec!["claude", "cl100k_base", "o200k_base", "gpt2", "o200k_harmony", "p50k_edit"]),
                1..6
            )
        ) {
            let meta = Metadata::builtin().unwrap();
            let resolver = Resolver::new(&meta);
            let selector = Selector::Tokenizers(names.iter().map(|s| s.to_string()).collect());
            let mask = resolver.mask(&selector).unwrap();
            let indices = resolver.indices(&selector).unwrap();
            prop_assert_eq!(mask.bits().count_ones() as usize, indices.len());
            for i in indices {
                prop_assert!(mask.bits() & (1 << i) != 0);
            }
        }
    }
}

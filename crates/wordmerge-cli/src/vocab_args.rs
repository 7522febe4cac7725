use wordmerge::{
    segmentation::WordSegmenter,
    vocab::{SymbolVocab, io::load_json_vocab_path},
};

/// Word marker arg group.
#[derive(clap::Args, Debug)]
pub struct SegmenterArgs {
    /// Start-of-word marker symbol.
    #[arg(long, default_value = None)]
    start_marker: Option<String>,

    /// End-of-word marker symbol.
    #[arg(long, default_value = "</w>")]
    end_marker: String,
}

impl SegmenterArgs {
    /// Build the word segmenter.
    pub fn segmenter(&self) -> Result<WordSegmenter, Box<dyn std::error::Error>> {
        Ok(WordSegmenter::new(
            self.start_marker.as_deref(),
            Some(self.end_marker.as_str()),
        )?)
    }
}

/// Vocabulary file arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// JSON vocabulary file.
    #[arg(long)]
    vocab: String,

    #[command(flatten)]
    pub segmenter: SegmenterArgs,
}

impl VocabArgs {
    /// Load the vocabulary.
    pub fn load_vocab(&self) -> Result<SymbolVocab<u32>, Box<dyn std::error::Error>> {
        log::info!("Loading vocabulary: {}", self.vocab);
        let vocab: SymbolVocab<u32> = load_json_vocab_path(&self.vocab)?;
        log::info!("Vocabulary Size: {}", vocab.len());
        Ok(vocab)
    }
}

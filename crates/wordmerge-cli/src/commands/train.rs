use std::io::Write;

use wordmerge::{
    training::{MergeTrainerOptions, utility::WordFrequencyCounter},
    vocab::{SymbolVocab, io::write_json_vocab},
};

use crate::{
    LogArgs,
    input_output::{OutputArgs, read_text},
    vocab_args::SegmenterArgs,
};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input files; "-" reads stdin.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of merges to learn.
    #[arg(long, default_value = "1000")]
    num_merges: usize,

    /// Unknown-token symbol.
    #[arg(long, default_value = "<unk>")]
    unknown_token: String,

    /// Count pairs in parallel.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    parallel: bool,

    #[command(flatten)]
    segmenter: SegmenterArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let segmenter = self.segmenter.segmenter()?;

        let mut counter: WordFrequencyCounter<u64> = WordFrequencyCounter::default();
        log::info!("Reading inputs:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            counter.update_from_text(read_text(path)?);
        }
        log::info!("Distinct words: {}", counter.word_counts.len());

        let freqs = counter.to_word_frequencies(&segmenter)?;

        log::info!("Training...");
        let results = MergeTrainerOptions::new(self.num_merges)
            .with_parallel(self.parallel)
            .init()
            .train(freqs);

        let vocab: SymbolVocab<u32> =
            SymbolVocab::build(&results.word_frequencies, &self.unknown_token)?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_json_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

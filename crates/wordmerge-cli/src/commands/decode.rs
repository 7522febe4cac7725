use std::io::{BufRead, Write};

use wordmerge::{
    decoders::{DecoderOptions, DictionaryDecoder, TokenDecoder, UnknownTokenPolicy},
    rayon::ParallelRayonDecoder,
};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    vocab_args::VocabArgs,
};

/// Handling for ids missing from the vocabulary.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum UnknownMode {
    /// Drop them.
    Skip,

    /// Fail.
    Strict,

    /// Write the ``--emit-text`` string.
    Emit,
}

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    /// Unknown id handling.
    #[arg(long, default_value = "skip")]
    unknown: UnknownMode,

    /// Text written for unknown ids with ``--unknown emit``.
    #[arg(long, default_value = "<unk>")]
    emit_text: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    fn options(&self) -> DecoderOptions {
        let policy = match self.unknown {
            UnknownMode::Skip => UnknownTokenPolicy::Skip,
            UnknownMode::Strict => UnknownTokenPolicy::Strict,
            UnknownMode::Emit => UnknownTokenPolicy::Emit(self.emit_text.as_str().into()),
        };
        DecoderOptions::default().with_unknown_policy(policy)
    }

    /// Run the decode command.
    ///
    /// Each input line of whitespace-separated ids becomes one output line.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = self.vocab.load_vocab()?;
        let segmenter = self.vocab.segmenter.segmenter()?;
        let decoder =
            ParallelRayonDecoder::new(DictionaryDecoder::from_vocab(&vocab, &segmenter, self.options()));

        let reader = self.input.open_reader()?;
        let mut batch: Vec<Vec<u32>> = Vec::new();
        for line in reader.lines() {
            let tokens = line?
                .split_whitespace()
                .map(|s| s.parse::<u32>())
                .collect::<Result<Vec<u32>, _>>()?;
            batch.push(tokens);
        }
        log::debug!("Decoding {} lines", batch.len());

        let refs: Vec<&[u32]> = batch.iter().map(Vec::as_slice).collect();
        let texts = decoder.try_decode_batch(&refs)?;

        let mut writer = self.output.open_writer()?;
        for text in texts {
            writeln!(writer, "{}", text.trim_end())?;
        }
        writer.flush()?;

        Ok(())
    }
}

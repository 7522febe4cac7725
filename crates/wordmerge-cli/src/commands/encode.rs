use std::io::{BufRead, Write};

use wordmerge::{
    encoders::{LongestMatchEncoder, TokenEncoder},
    rayon::ParallelRayonEncoder,
};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    vocab_args::VocabArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    /// Unknown-token symbol; must be in the vocabulary.
    #[arg(long, default_value = "<unk>")]
    unknown_token: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    ///
    /// Each input line becomes one output line of space-separated ids.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = self.vocab.load_vocab()?;
        let segmenter = self.vocab.segmenter.segmenter()?;
        let encoder = ParallelRayonEncoder::new(LongestMatchEncoder::new(
            vocab,
            segmenter,
            &self.unknown_token,
        )?);

        let reader = self.input.open_reader()?;
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        log::debug!("Encoding {} lines", lines.len());

        let mut writer = self.output.open_writer()?;
        for tokens in encoder.encode_batch(&lines) {
            for (idx, token) in tokens.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}

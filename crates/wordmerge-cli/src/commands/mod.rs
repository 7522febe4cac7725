mod bleu;
mod decode;
mod encode;
mod train;

/// Subcommands for wordmerge
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a vocabulary from text files.
    Train(train::TrainArgs),

    /// Encode text lines into token ids.
    Encode(encode::EncodeArgs),

    /// Decode token id lines into text.
    Decode(decode::DecodeArgs),

    /// Score a text against a reference.
    Bleu(bleu::BleuArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Bleu(cmd) => cmd.run(),
        }
    }
}

use std::io::Write;

use wordmerge::metrics::{DEFAULT_MAX_ORDER, calculate_bleu};

use crate::{
    LogArgs,
    input_output::{OutputArgs, read_text},
};

/// Args for the bleu command.
#[derive(clap::Args, Debug)]
pub struct BleuArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// File holding the text to score; "-" reads stdin.
    #[arg(long)]
    actual: String,

    /// File holding the reference text.
    #[arg(long)]
    reference: String,

    /// Maximum n-gram order.
    #[arg(long, default_value_t = DEFAULT_MAX_ORDER)]
    max_order: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl BleuArgs {
    /// Run the bleu command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let actual = read_text(&self.actual)?;
        let reference = read_text(&self.reference)?;

        let score = calculate_bleu(actual.trim(), reference.trim(), self.max_order)?;
        log::info!("max order {}: {:.4}", self.max_order, score);

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{score:.4}")?;
        writer.flush()?;

        Ok(())
    }
}

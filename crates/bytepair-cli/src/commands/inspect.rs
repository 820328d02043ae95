use std::io::Write;

use bytepair::{BytePairError, vocab::BpeModel};

use crate::{LogArgs, input_output::OutputArgs, model_args::ModelArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model = self.model.load_model()?;

        let mut writer = self.output.open_writer()?;
        write_summary(&model, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write the vocab size, merge count, and one line per merge rule.
fn write_summary<W: Write>(
    model: &BpeModel<u32>,
    writer: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let vocab = model.vocab();
    writeln!(writer, "vocab size: {}", vocab.len())?;
    writeln!(writer, "merges: {}", model.merges().len())?;
    for (idx, rule) in model.merges().iter().enumerate() {
        let id = vocab
            .get_id(rule.merged())
            .ok_or_else(|| BytePairError::TokenNotFound {
                token: rule.merged().clone(),
            })?;
        writeln!(
            writer,
            "{idx}: {:?} + {:?} -> {:?} ({id})",
            rule.left(),
            rule.right(),
            rule.merged()
        )?;
    }
    Ok(())
}

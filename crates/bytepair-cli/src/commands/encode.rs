use std::io::Write;

use bytepair::{
    encoders::{MergeTableEncoder, TokenEncoder},
    rayon::ParallelRayonEncoder,
};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    model_args::ModelArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model = self.model.load_model()?;
        let encoder = ParallelRayonEncoder::new(MergeTableEncoder::new(model));

        let lines = self.input.read_lines()?;
        let batch = encoder.try_encode_batch(&lines)?;

        let mut writer = self.output.open_writer()?;
        for ids in &batch {
            for (idx, id) in ids.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}

use std::io::Write;

use bytepair::{
    decoders::{DictionaryDecoder, TokenDecoder},
    rayon::ParallelRayonDecoder,
};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    model_args::ModelArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Replace invalid UTF-8 with U+FFFD instead of failing.
    #[arg(long)]
    lossy: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model = self.model.load_model()?;
        let decoder = ParallelRayonDecoder::new(DictionaryDecoder::from_model(model)?);

        let batch = self
            .input
            .read_lines()?
            .iter()
            .map(|line| parse_ids(line))
            .collect::<Result<Vec<_>, _>>()?;

        let texts = if self.lossy {
            batch
                .iter()
                .map(|ids| decoder.decode_to_string_lossy(ids))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            decoder.try_decode_batch_to_strings(&batch)?
        };

        let mut writer = self.output.open_writer()?;
        for text in &texts {
            writeln!(writer, "{text}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn parse_ids(line: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
    line.split_whitespace().map(|s| s.parse()).collect()
}

use bytepair::{
    io::write_json_model,
    training::{BpeTrainer, BpeTrainerOptions, TrainOutcome},
};

use crate::{LogArgs, input_output::OutputArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; concatenated in order.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size, including the 256 byte tokens.
    #[arg(long, default_value = "1024")]
    vocab_size: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = BpeTrainerOptions::new(self.vocab_size).with_record_steps(false);
        let mut trainer = options.init();

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            self.read_text_file(&mut trainer, path)?;
        }

        log::info!("Training Tokenizer...");
        let results = trainer.train::<u32>()?;
        if results.outcome == TrainOutcome::NoPairsRemaining {
            log::warn!(
                "Training ended early; no pairs remain after {} merges",
                results.merges.len()
            );
        }
        log::info!("Vocabulary Size: {}", results.vocab.len());

        let model = results.into_model();

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_json_model(&model, &mut writer)?;

        Ok(())
    }

    fn read_text_file(
        &self,
        trainer: &mut BpeTrainer,
        path: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        trainer.update_from_text(text);
        Ok(())
    }
}

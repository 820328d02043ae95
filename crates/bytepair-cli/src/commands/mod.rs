mod decode;
mod encode;
mod inspect;
mod train;

/// Subcommands for bytepair
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a new model.
    Train(train::TrainArgs),

    /// Encode text lines into id lines.
    Encode(encode::EncodeArgs),

    /// Decode id lines into text lines.
    Decode(decode::DecodeArgs),

    /// Print a model's vocabulary size and merge table.
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}

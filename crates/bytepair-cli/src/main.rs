mod commands;
mod input_output;
mod logging;
mod model_args;

use clap::Parser;
use commands::Commands;
pub use logging::LogArgs;

/// bytepair: train and apply byte-level BPE tokenizers.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_train() {
        let args = Args::try_parse_from([
            "bytepair",
            "train",
            "a.txt",
            "b.txt",
            "--vocab-size",
            "512",
            "--output",
            "model.json",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Train(_)));
    }

    #[test]
    fn test_parse_requires_model() {
        assert!(Args::try_parse_from(["bytepair", "encode"]).is_err());
        assert!(Args::try_parse_from(["bytepair", "decode", "--model", "m.json"]).is_ok());
    }
}

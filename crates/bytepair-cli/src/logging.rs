use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
///
/// Each command picks its own default level; every `-v` raises it one step.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Log more than the command's default (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level: 0 is off, 1 is errors, up to 5 for trace.
    fn level(
        &self,
        default: u8,
    ) -> u8 {
        if self.quiet {
            0
        } else {
            default.saturating_add(self.verbose)
        }
    }

    /// Initialize ``stderrlog``.
    ///
    /// ## Arguments
    /// * `default` - the command's level with no `-v` flags; 2 logs warnings.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level_num(self.level(default)))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

fn level_num(level: u8) -> LogLevelNum {
    match level {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, expand, sweep};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(commands.verbose)?;
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Discover => {
            print::header("reading the neighbor table", cfg.quiet);
            discover::discover(&cfg)
        }
        Commands::Expand { cidr } => {
            print::header("expanding cidr block", cfg.quiet);
            expand::expand(&cidr, &cfg)
        }
        Commands::Sweep { cidr } => sweep::sweep(&cidr, &cfg),
    }
}

mod commands;
mod terminal;

use commands::{CommandLine, Commands, list, shell, show};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::shell(&cfg),
        Commands::List => {
            print::header("all student records", cfg.quiet);
            list::list(&cfg)
        }
        Commands::Show { id } => {
            print::header("student record", cfg.quiet);
            show::show(&id, &cfg)
        }
    }
}

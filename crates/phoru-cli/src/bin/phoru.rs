use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use phoru_cli::commands::{config_ops, serve_ops, table_ops, translate_ops};
use phoru_cli::logging;
use phoru_core::{MappingTable, Transliterator};

#[derive(Parser)]
#[command(
    name = "phoru",
    version,
    about = "Transliterate pseudo-phonetic Latin input into Cyrillic Russian",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Print every input character and its output to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Run in HTTP server mode on the given address
    #[arg(long, value_name = "ADDR")]
    http: Option<String>,
    /// Settings TOML file (defaults are built in)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let table = MappingTable::builtin();
    let matches = Cli::command()
        .after_help(table_ops::help_text(&table))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    match cli.command {
        Some(Command::SettingsExport) => config_ops::settings_export(),
        Some(Command::SettingsValidate { file }) => config_ops::settings_validate(&file),
        None => {
            let settings = config_ops::load_settings(cli.config.as_deref());
            logging::init_tracing(&settings.log.filter);
            let transliterator = Transliterator::new(table);
            match cli.http {
                Some(addr) => serve_ops::serve(&addr, transliterator, &settings),
                None => translate_ops::translate_stdin(&transliterator, cli.verbose),
            }
        }
    }
}

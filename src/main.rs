use clap::Parser;
use star_boxes::cli::{self, Args, CliError, Command, ConfigAction, Settings};
use star_boxes::config::Config;
use star_boxes::logging;

fn run(args: Args) -> Result<(), CliError> {
    // `config init` creates the file, so it must not require one to exist
    let cfg = match &args.command {
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => Config::default(),
        _ => cli::load_config(args.config.as_deref())?,
    };
    let settings = Settings::resolve(&args, &cfg)?;
    let _logger = logging::init_logging(&settings.log_spec)?;
    log::debug!("effective settings: {:?}", settings);

    match args.command {
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, args.config.as_deref(), &settings)
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            cli::run_grid(args.input.as_deref(), &settings, &mut out)
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

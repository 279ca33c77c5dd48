use jatim_detective::console::{self, TerminalConsole};
use jatim_detective::games::{self, Session};
use jatim_detective::{GameConfig, GameError, splash};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main()
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    match run() {
        Ok(()) => {}
        Err(GameError::Interrupted) => {
            let _ = console::write_farewell(&mut std::io::stdout());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), GameError>
{
    if let Err(err) = console::install_interrupt_handler() {
        log::warn!("{err}");
    }
    let config = GameConfig::default();
    let mut console = TerminalConsole::new(config.palette.clone());
    splash::play(&mut console, &config.splash)?;

    let mut session = Session::new(&config, &mut console, StdRng::from_entropy());
    games::run_menu(&mut session)
}

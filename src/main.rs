use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    time::Duration,
};

use slom::{
    app_dirs::AppDirs,
    celebration::Burst,
    config::{Config, ConfigStore, FileConfigStore},
    feedback::TerminalFeedback,
    host::Host,
    navigation::Route,
    runtime::{map_key, AppEvent, CrosstermEventSource, FixedTicker, Input, Runner},
    ui::{self, Chrome},
};

/// spin the wheel, stop the cursor, hold your breath
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Three mini-games in a row: a wheel picks how long you hold, a sweeping cursor picks how long you breathe in, then a guided countdown walks you through both."
)]
pub struct Cli {
    /// route to open first, e.g. / or /home/game1
    #[clap(long, default_value = "/")]
    start: Route,

    /// skip the wheel animation and particle bursts
    #[clap(long)]
    reduced_motion: bool,

    /// do not ring the terminal bell on countdown ticks
    #[clap(long)]
    mute: bool,

    /// do not flash the border in place of vibrations
    #[clap(long)]
    no_haptics: bool,

    /// redraw interval in milliseconds
    #[clap(long)]
    frame_ms: Option<u64>,

    /// seed for the wheel, for reproducible sessions
    #[clap(long)]
    seed: Option<u64>,

    /// persist the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Flags only ever switch things off or override the stored value.
    fn apply(&self, mut config: Config) -> Config {
        if self.reduced_motion {
            config.reduced_motion = true;
        }
        if self.mute {
            config.sound = false;
        }
        if self.no_haptics {
            config.haptics = false;
        }
        if let Some(ms) = self.frame_ms {
            config.frame_ms = ms.max(1);
        }
        config
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn init_logging() {
    let Some(path) = AppDirs::log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging();

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!("config: saved to {}", store.path().display());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let feedback = TerminalFeedback::new(config.haptics, config.sound);
    let mut host = Host::new(feedback, cli.rng());
    let result = start_tui(&mut terminal, &mut host, &config, cli.start);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    host: &mut Host<TerminalFeedback>,
    config: &Config,
    start: Route,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(config.frame_ms)),
    );
    let mut burst = Burst::new();
    let mut pulse_until: Option<Duration> = None;
    let mut celebrating = false;

    info!("starting at {}", start.path());
    host.start(start, runner.now());

    loop {
        let event = runner.step();
        let now = runner.now();
        match event {
            AppEvent::Key(key) => match map_key(key, host.current_route()) {
                Input::Quit => break,
                Input::Action(action) => host.dispatch(action, now),
                Input::Ignored => {}
            },
            AppEvent::Resize | AppEvent::Tick => {}
        }
        // Timers are late by at most one tick; the cursor reads the clock.
        host.advance(now);

        if let Some(ms) = host.feedback_mut().take_pulse() {
            pulse_until = Some(now + Duration::from_millis(ms));
        }
        let pulse = pulse_until.is_some_and(|until| now < until);

        let celebrate = ui::celebrates(host.view());
        if celebrate && !celebrating && !config.reduced_motion {
            let size = terminal.size().unwrap_or_default();
            burst.start(
                now,
                size.width.saturating_sub(2),
                size.height.saturating_sub(2),
            );
        }
        celebrating = celebrate;
        burst.update(now);

        terminal.draw(|f| {
            let chrome = Chrome {
                now,
                reduced_motion: config.reduced_motion,
                pulse,
                burst: &burst,
            };
            ui::draw(f, host.view(), &chrome);
        })?;
    }

    host.shutdown(runner.now());
    if host.scheduler().pending() > 0 {
        warn!("{} timers outstanding at exit", host.scheduler().pending());
    }
    Ok(())
}

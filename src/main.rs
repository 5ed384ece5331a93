use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use tempo::Screen;
use tempo::core::config;
use tempo::core::theme::Theme;

#[derive(Parser)]
#[command(name = "tempo", about = "Stopwatch and countdown timer for the terminal")]
struct Args {
    /// Color theme (overrides config file and TEMPO_THEME)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Screen shown on launch
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Log level written to tempo.log (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug", value_parser = parse_log_level)]
    log_level: LevelFilter,
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| {
        format!("unknown log level {s:?} (expected off, error, warn, info, debug or trace)")
    })
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tempo.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::TempoConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.theme, args.screen);

    log::info!(
        "Tempo starting up (theme: {}, screen: {})",
        resolved.theme.label(),
        resolved.start_screen.title()
    );

    tempo::tui::run(resolved)
}

use log::LevelFilter;

/// squid demo command line interface arguments.
#[derive(clap::Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about = "Walks through fixed-size vector and matrix operations."
)]
pub struct CliArgs {
    /// Whether to print any results to stdout.
    #[clap(short, long, help = "Silent output printed to stdout")]
    pub quiet: bool,

    /// Whether to show the timestamp in the log.
    #[clap(
        long,
        help = "Show timestamp for each log message in seconds since\nprogram starts"
    )]
    pub log_timestamp: bool,

    /// Verbosity level for the log.
    #[clap(
        long,
        help = "Setting logging verbosity level (higher for more\ndetails)\n  0 - error\n  1 - \
                warn + error\n  2 - info + warn + error\n  3 - debug + info + warn + error\n  4 - \
                trace + debug + info + warn + error\n\x08",
        default_value_t = 1
    )]
    pub log_level: u8,
}

/// Parses the arguments, returns the arguments and the launch time.
pub fn parse_args<T: clap::Parser>() -> (T, std::time::SystemTime) {
    let args = T::parse();
    let launch_time = std::time::SystemTime::now();
    (args, launch_time)
}

/// Logs the program name, launch time and operating system.
pub fn log_launch(name: &str, launch_time: std::time::SystemTime) {
    log::info!(
        "{} launched at {} on {}.",
        name,
        chrono::DateTime::<chrono::Utc>::from(launch_time),
        std::env::consts::OS
    );
}

/// Initialises logging settings.
///
/// # Arguments
///
/// * `timestamp` - Base time for the elapsed-time prefix of each message; no
///   prefix when `None`.
/// * `log_level` - Top level log level of the program, see
///   [`log_filter_from_level`].
pub fn setup_logging(timestamp: Option<std::time::SystemTime>, log_level: u8) {
    use std::io::Write;
    let mut builder = env_logger::builder();
    builder.format(move |buf, record| {
        let top_level_module = record
            .module_path()
            .and_then(|path| path.split("::").next())
            .unwrap_or("unknown");
        match timestamp {
            Some(timestamp) => {
                let duration = timestamp.elapsed().unwrap_or_default();
                let millis = duration.as_millis() % 1000;
                let seconds = duration.as_secs() % 60;
                let minutes = (duration.as_secs() / 60) % 60;
                let hours = (duration.as_secs() / 60) / 60;
                writeln!(
                    buf,
                    "{}:{}:{}.{:03} {:5} [{}]: {}",
                    hours,
                    minutes,
                    seconds,
                    millis,
                    record.level(),
                    top_level_module,
                    record.args()
                )
            },
            None => {
                writeln!(
                    buf,
                    "{:5} [{}]: {}",
                    record.level(),
                    top_level_module,
                    record.args()
                )
            },
        }
    });
    builder
        .filter_level(log_filter_from_level(log_level))
        .init();
}

/// Converts a log level to a log filter.
pub fn log_filter_from_level(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

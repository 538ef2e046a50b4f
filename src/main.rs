//! Bubble Typer entry point
//!
//! Runs a headless demo session: the auto typist plays, draw calls go to a
//! recording sink, and a JSON summary is printed when the session ends.
//!
//! Usage: `bubble-typer [--realtime] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use bubble_typer::ConfigError;
    use bubble_typer::Settings;
    use bubble_typer::platform::{DemoOptions, MAX_DEMO_TICKS, run_demo};

    #[derive(Debug, Default)]
    struct Args {
        realtime: bool,
        settings_path: Option<PathBuf>,
    }

    impl Args {
        fn parse() -> Self {
            let mut args = Args::default();
            for arg in std::env::args().skip(1) {
                match arg.as_str() {
                    "--realtime" => args.realtime = true,
                    _ if arg.starts_with("--") => log::warn!("Unknown flag: {}", arg),
                    _ => args.settings_path = Some(PathBuf::from(arg)),
                }
            }
            args
        }
    }

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    pub fn run() -> Result<(), ConfigError> {
        let args = Args::parse();
        let settings = Settings::load_or_default(args.settings_path.as_deref());

        let seed = settings.seed.unwrap_or_else(time_seed);
        log::info!("Game initialized with seed: {}", seed);

        let summary = run_demo(
            &settings,
            DemoOptions {
                seed,
                max_ticks: MAX_DEMO_TICKS,
                realtime: args.realtime,
            },
        )?;
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), bubble_typer::ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bubble Typer (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the product on wasm32
}

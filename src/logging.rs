use std::fs::File;
use std::path::Path;

use simplelog::{ColorChoice, CombinedLogger, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Installs the global logger: `env_logger` driven by `RUST_LOG` (default
/// `info`), or a terminal plus file pair when `log_file` is given.
pub fn init(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match log_file {
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .try_init()?;
        }
        Some(path) => {
            let cfg = simplelog::Config::default();
            CombinedLogger::init(vec![
                TermLogger::new(LevelFilter::Info, cfg.clone(), TerminalMode::Mixed, ColorChoice::Auto),
                WriteLogger::new(LevelFilter::Debug, cfg, File::create(path)?),
            ])?;
        }
    }
    Ok(())
}

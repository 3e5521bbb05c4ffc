use termcolors::config::Config;
use termcolors::constants::{WARN_CONFIG_FALLBACK, WARN_LOGGING_DISABLED};
use termcolors::logger::Logger;
use termcolors::swatch;
use termcolors::{Environment, Resolver};

fn main() {
    // A broken config file must not keep the report from printing
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("{}: {:#}", WARN_CONFIG_FALLBACK, e);
        Config::default()
    });

    if let Err(e) = Logger::from_config(&config.logging).and_then(|logger| logger.init()) {
        eprintln!("{}: {:#}", WARN_LOGGING_DISABLED, e);
    }

    let support = Resolver::new(&config.detection).resolve(&Environment::capture());
    log::info!("Detected color level: {}", support.level());

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = swatch::write_report(&mut stdout, support, &config.display) {
        log::error!("Failed to write color report: {}", e);
    }
}

//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod interactive;

use chatgate_core::Config;

/// Resolves a post-login location against the server, prints it and
/// optionally hands it to the system browser.
///
/// The attempt already succeeded at this point, so a bad location is only
/// reported.
fn continue_at(config: &Config, location: &str) {
    let url = match config.location_url(location) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(location, error = %err, "could not resolve post-login location");
            eprintln!("{err:#}");
            return;
        }
    };
    println!("Continue at {url}");

    if config.open_browser {
        if let Err(err) = open::that(url.as_str()) {
            tracing::warn!(%url, error = %err, "could not open browser");
            eprintln!("Could not open a browser: {err}");
        }
    }
}

//! Console banner printed on load.

use folio_domain::banner;

use crate::config::BannerConfig;
use crate::ports::ConsoleSurface;

/// Print the configured banner. Returns the number of lines written.
pub fn print_banner(console: &impl ConsoleSurface, config: &BannerConfig) -> usize {
    let lines = banner::lines(&config.title, Some(config.contact.as_str()));
    for line in &lines {
        console.log_styled(&line.console_format(), line.style);
    }
    lines.len()
}

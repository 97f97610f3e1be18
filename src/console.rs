//! Colorful console output for startup diagnostics.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use crate::domain::StorageCatalog;
use crate::solver::CombinationIndex;

/// ASCII art banner for service startup.
pub fn print_banner() {
    let banner = r#"
 __     __   _     _      _        ____  _
 \ \   / /__| |__ (_) ___| | ___  / ___|| |_ ___  _ __ __ _  __ _  ___
  \ \ / / _ \ '_ \| |/ __| |/ _ \ \___ \| __/ _ \| '__/ _` |/ _` |/ _ \
   \ V /  __/ | | | | (__| |  __/  ___) | || (_) | | | (_| | (_| |  __/
    \_/ \___|_| |_|_|\___|_|\___| |____/ \__\___/|_|  \__,_|\__, |\___|
                                                            |___/
"#;
    println!("{}", banner.cyan().bold());
    println!(
        "  {} {}\n",
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black(),
        "Vehicle Storage".bright_cyan()
    );
}

/// Prints the catalog and index summary after the startup precomputation.
pub fn print_index_summary(catalog: &StorageCatalog, index: &CombinationIndex) {
    println!(
        "  catalog: {} listings across {} locations",
        catalog
            .listing_count()
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        catalog
            .location_count()
            .to_formatted_string(&Locale::en)
            .bright_yellow()
    );
    println!(
        "  index:   {} combinations precomputed, sorted cheapest-first",
        index
            .combination_count()
            .to_formatted_string(&Locale::en)
            .bright_yellow()
    );

    for (location_id, combination_count) in index.location_summaries() {
        println!(
            "    {} {} combinations",
            format!("[{}]", location_id).bright_cyan(),
            combination_count.to_formatted_string(&Locale::en).white()
        );
    }
    println!();
}

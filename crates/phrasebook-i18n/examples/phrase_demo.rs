//! Demonstration of culture-aware phrases
//!
//! Prints counts, ordinals, yes/no and relative times for a handful of
//! cultures, showing the fallback and pluralization rules side by side.

use chrono::{Duration, Utc};
use phrasebook_i18n::{CountNoun, Culture, Localizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let localizer = Localizer::builder()
        .default_culture(Culture::english())
        .build()?;

    let cultures = ["en-US", "fr-CA", "pt-PT", "ru", "he", "zh-TW", "ja", "ko"]
        .into_iter()
        .map(Culture::parse)
        .collect::<Result<Vec<_>, _>>()?;

    println!("=== Counts ===");
    for culture in &cultures {
        let phrases = [0, 1, 2, 5, 21]
            .into_iter()
            .map(|n| localizer.to_localized_count(n, CountNoun::File, Some(culture)))
            .collect::<Result<Vec<_>, _>>()?;
        println!("{:>6}: {}", culture.name(), phrases.join(" | "));
    }

    println!("\n=== Ordinals ===");
    for culture in &cultures {
        let ordinals = [1, 2, 3, 11, 22]
            .into_iter()
            .map(|n| localizer.ordinal(n, Some(culture)))
            .collect::<Result<Vec<_>, _>>()?;
        println!("{:>6}: {}", culture.name(), ordinals.join(" "));
    }

    println!("\n=== Yes / No ===");
    for culture in &cultures {
        println!(
            "{:>6}: {} / {}",
            culture.name(),
            localizer.yes_no(true, Some(culture))?,
            localizer.yes_no(false, Some(culture))?
        );
    }

    println!("\n=== Relative time ===");
    let now = Utc::now();
    let offsets = [
        Duration::seconds(2),
        Duration::minutes(15),
        Duration::hours(30),
        Duration::days(10),
        Duration::days(75),
        Duration::days(800),
    ];
    for culture in &cultures {
        let ago = offsets
            .iter()
            .map(|offset| localizer.time_ago(&(now - *offset), Some(culture), Some(now)))
            .collect::<Result<Vec<_>, _>>()?;
        println!("{:>6}: {}", culture.name(), ago.join(" | "));
    }

    let stats = localizer.cache_stats();
    println!(
        "\nCache: {} entries, {} hits, {} misses",
        stats.entries, stats.hits, stats.misses
    );

    Ok(())
}

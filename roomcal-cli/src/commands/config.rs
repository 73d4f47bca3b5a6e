use anyhow::Result;
use owo_colors::OwoColorize;
use roomcal_core::config::RoomcalConfig;
use roomcal_core::{BookingFile, Locale};

pub fn run(config: &RoomcalConfig, source: &BookingFile, locale: Locale) -> Result<()> {
    let config_path = RoomcalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Bookings:   {}", source.path().display());

    println!();
    println!("{}", "Display".bold());
    println!("  Locale:     {}", locale);
    println!(
        "  Resource:   {}",
        config.default_resource.as_deref().unwrap_or("(all)")
    );

    Ok(())
}

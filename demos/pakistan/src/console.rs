//! Interactive prompts.  Every prompt re-asks until the answer is valid and
//! returns `None` once input is exhausted.

use std::io::{self, BufRead, Write};

use nav_core::{CityId, NavConfig};
use nav_network::RoadNetwork;

/// Print the city list in three columns.
pub fn print_menu<W: Write>(out: &mut W, network: &RoadNetwork) -> io::Result<()> {
    writeln!(out, "\n--- AVAILABLE CITIES ---")?;
    for (i, city) in network.cities().iter().enumerate() {
        write!(out, "{:<3}. {:<15}", city.id.get(), city.name)?;
        if i % 3 == 2 {
            writeln!(out)?;
        }
    }
    if network.city_count() % 3 != 0 {
        writeln!(out)?;
    }
    Ok(())
}

/// Ask for a registered city id.
pub fn prompt_city<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    network: &RoadNetwork,
) -> io::Result<Option<CityId>> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<u32>().map(CityId) {
            Ok(id) if network.contains(id) => return Ok(Some(id)),
            _ => writeln!(out, "Invalid input! Please enter one of the city numbers listed above.")?,
        }
    }
}

/// Ask for an average speed within the configured bounds.
pub fn prompt_speed<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &NavConfig,
) -> io::Result<Option<f64>> {
    loop {
        write!(
            out,
            "Enter average speed ({}-{} km/h): ",
            config.min_speed_kmh, config.max_speed_kmh
        )?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<f64>() {
            Ok(speed) if config.speed_in_range(speed) => return Ok(Some(speed)),
            _ => writeln!(
                out,
                "Unrealistic speed! Please keep it between {} and {}.",
                config.min_speed_kmh, config.max_speed_kmh
            )?,
        }
    }
}

/// Ask whether to plan another trip.  Only `y`/`Y` continues.
pub fn prompt_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "\nDo you want to plan another trip? (y/n): ")?;
    out.flush()?;
    Ok(matches!(read_line(input)?.as_deref(), Some("y" | "Y")))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_owned()))
}

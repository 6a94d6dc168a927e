use std::error::Error;
use std::f64::consts::TAU;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use orrery_core::{
    heliocentric_position, sun_position, Body, RadiusUnit, ReferenceTables,
};
use orrery_frames::nutation;
use orrery_search::{
    nearest_apside, next_phase, seasonal_marker, ApsideKind, ApsideSearchConfig, Phase,
    PhaseSearchConfig, SeasonSearchConfig, SeasonalMarker,
};
use orrery_time::{
    calendar_to_jd, decimal_year, delta_t_seconds, jd_to_calendar, tt_to_ut, ut_to_tt, Jd, Tt,
};

#[derive(Parser)]
#[command(name = "orrery", about = "Orrery ephemeris CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ΔT = TT − UT for a decimal year
    DeltaT {
        /// Decimal year, e.g. 2024.5
        year: f64,
    },
    /// Julian Dates for a calendar instant
    Jd {
        /// UT datetime (YYYY-MM-DDThh:mm:ss)
        date: String,
    },
    /// Calendar instant for a UT Julian Date
    Calendar {
        /// Julian Date (UT)
        jd: f64,
    },
    /// Heliocentric position of a planet
    Position {
        /// Body name (mercury .. neptune)
        body: String,
        /// Julian Date (TT)
        jd: f64,
        /// Print the radius in meters instead of AU
        #[arg(long)]
        meters: bool,
    },
    /// Geometric geocentric position of the Sun
    Sun {
        /// Julian Date (TT)
        jd: f64,
    },
    /// Nutation in longitude and obliquity
    Nutation {
        /// Julian Date (TT)
        jd: f64,
    },
    /// Next lunar phase of a given kind after a date
    Phase {
        /// Phase kind: new, first, full, third
        kind: String,
        /// UT datetime (YYYY-MM-DDThh:mm:ss)
        date: String,
    },
    /// Apside of a planet's orbit nearest a date
    Apside {
        /// Body name (mercury .. neptune)
        body: String,
        /// Kind: perihelion or aphelion
        kind: String,
        /// UT datetime (YYYY-MM-DDThh:mm:ss)
        date: String,
    },
    /// Equinox or solstice of a year
    Season {
        /// Marker: march, june, september, december
        marker: String,
        /// Calendar year
        year: i32,
    },
}

fn parse_date(text: &str) -> Result<NaiveDateTime, Box<dyn Error>> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("bad datetime {text:?}: {e}").into())
}

fn parse_body(name: &str) -> Result<Body, Box<dyn Error>> {
    Body::from_name(name).ok_or_else(|| format!("unknown body {name:?}").into())
}

fn tt_of(text: &str) -> Result<Jd<Tt>, Box<dyn Error>> {
    Ok(ut_to_tt(calendar_to_jd(parse_date(text)?))?)
}

fn print_utc(jd_tt: Jd<Tt>) -> Result<(), Box<dyn Error>> {
    let utc = jd_to_calendar(tt_to_ut(jd_tt)?)?;
    println!("{jd_tt}  =  {utc} UT");
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::DeltaT { year } => {
            println!("ΔT({year}) = {:.3} s", delta_t_seconds(year));
        }

        Commands::Jd { date } => {
            let datetime = parse_date(&date)?;
            let jd_ut = calendar_to_jd(datetime);
            let jd_tt = ut_to_tt(jd_ut)?;
            println!("{jd_ut}");
            println!("{jd_tt}  (ΔT = {:.3} s)", delta_t_seconds(decimal_year(datetime)));
        }

        Commands::Calendar { jd } => {
            println!("{} UT", jd_to_calendar(Jd::new(jd))?);
        }

        Commands::Position { body, jd, meters } => {
            let body = parse_body(&body)?;
            let p = heliocentric_position(&ReferenceTables, body, Jd::new(jd))?;
            let unit = if meters { RadiusUnit::Meters } else { RadiusUnit::Au };
            println!(
                "{body}: L = {:.7} deg  B = {:.7} deg  R = {:.8} {}",
                p.longitude.rem_euclid(TAU).to_degrees(),
                p.latitude.to_degrees(),
                p.radius_in(unit),
                if meters { "m" } else { "AU" },
            );
        }

        Commands::Sun { jd } => {
            let p = sun_position(&ReferenceTables, Jd::new(jd))?;
            println!(
                "Sun: lon = {:.7} deg  lat = {:+.3} arcsec  R = {:.8} AU",
                p.longitude.rem_euclid(TAU).to_degrees(),
                p.latitude.to_degrees() * 3600.0,
                p.radius,
            );
        }

        Commands::Nutation { jd } => {
            let n = nutation(Jd::new(jd))?;
            println!(
                "Δψ = {:+.4} arcsec   Δε = {:+.4} arcsec",
                n.longitude.to_degrees() * 3600.0,
                n.obliquity.to_degrees() * 3600.0,
            );
        }

        Commands::Phase { kind, date } => {
            let phase = match kind.as_str() {
                "new" => Phase::New,
                "first" => Phase::FirstQuarter,
                "full" => Phase::Full,
                "third" => Phase::ThirdQuarter,
                other => return Err(format!("unknown phase kind {other:?}").into()),
            };
            let event = next_phase(
                &ReferenceTables,
                phase,
                tt_of(&date)?,
                &PhaseSearchConfig::default(),
            )?;
            println!("{phase} (lunation {})", event.lunation);
            print_utc(event.jd_tt)?;
        }

        Commands::Apside { body, kind, date } => {
            let body = parse_body(&body)?;
            let kind = match kind.as_str() {
                "perihelion" => ApsideKind::Periapsis,
                "aphelion" => ApsideKind::Apoapsis,
                other => return Err(format!("unknown apside kind {other:?}").into()),
            };
            let event = nearest_apside(
                &ReferenceTables,
                body,
                kind,
                tt_of(&date)?,
                &ApsideSearchConfig::default(),
            )?;
            println!("{body} {kind}: R = {:.8} AU", event.radius);
            print_utc(event.jd_tt)?;
        }

        Commands::Season { marker, year } => {
            let marker = match marker.as_str() {
                "march" => SeasonalMarker::MarchEquinox,
                "june" => SeasonalMarker::JuneSolstice,
                "september" => SeasonalMarker::SeptemberEquinox,
                "december" => SeasonalMarker::DecemberSolstice,
                other => return Err(format!("unknown marker {other:?}").into()),
            };
            let event = seasonal_marker(
                &ReferenceTables,
                year,
                marker,
                &SeasonSearchConfig::default(),
            )?;
            println!(
                "{marker} {year}: solar longitude {:.5} deg",
                event.solar_longitude.to_degrees()
            );
            print_utc(event.jd_tt)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

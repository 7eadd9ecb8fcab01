use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use nazhika_astro::{AyanamsaModel, ayanamsa_deg, moon_longitude, sidereal_sun_longitude, sun_longitude};
use nazhika_calendar::{
    CalendarError, find_sankranti, next_occurrence, tamil_date, vedic_date, vedic_time,
};
use nazhika_solar::{CachedSolar, GeoCoordinate, MeeusSolar, SolarError};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "nazhika", about = "Vedic/Tamil calendrical clock CLI")]
struct Cli {
    /// Observer latitude in degrees, north positive
    #[arg(long, global = true, default_value_t = 13.0827)]
    lat: f64,
    /// Observer longitude in degrees, east positive
    #[arg(long, global = true, default_value_t = 80.2707)]
    lon: f64,
    /// IANA timezone name
    #[arg(long, global = true, default_value = "Asia/Kolkata")]
    tz: String,
    /// Instant to evaluate, RFC 3339 (default: now)
    #[arg(long, global = true)]
    date: Option<String>,
    /// Ayanamsa model
    #[arg(long, global = true, value_enum, default_value = "linear")]
    ayanamsa: AyanamsaArg,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AyanamsaArg {
    Linear,
    Interpolated,
}

impl From<AyanamsaArg> for AyanamsaModel {
    fn from(arg: AyanamsaArg) -> Self {
        match arg {
            AyanamsaArg::Linear => Self::Linear,
            AyanamsaArg::Interpolated => Self::Interpolated,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Nazhigai clock reading
    VedicTime,
    /// Tamil month and day-of-month
    TamilDate,
    /// Composite panchang snapshot
    VedicDate,
    /// Next future firing of a nazhigai:vinazhigai target
    #[command(allow_negative_numbers = true)]
    NextOccurrence {
        /// Target nazhigai (out-of-range values extrapolate)
        nazhigai: i32,
        /// Target vinazhigai
        #[arg(default_value_t = 0)]
        vinazhigai: i32,
    },
    /// Most recent crossing of a sidereal longitude by the Sun
    Sankranti {
        /// Target sidereal longitude in degrees
        target: f64,
    },
    /// Raw longitudes and ayanamsa at the instant
    Sun,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),
    #[error("invalid RFC 3339 date '{0}'")]
    InvalidDate(String),
    #[error(transparent)]
    Coordinate(#[from] SolarError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("no sunrise available for the requested date and location")]
    NoSunrise,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let tz: Tz = cli
        .tz
        .parse()
        .map_err(|_| CliError::InvalidTimezone(cli.tz.clone()))?;
    let t: DateTime<Utc> = match &cli.date {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map_err(|_| CliError::InvalidDate(raw.clone()))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let coord = GeoCoordinate::new(cli.lat, cli.lon)?;
    let model: AyanamsaModel = cli.ayanamsa.into();
    let provider = CachedSolar::new(MeeusSolar);

    match cli.command {
        Commands::VedicTime => {
            let vt = vedic_time(t, coord, &provider, tz);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&vt)?);
            } else {
                println!(
                    "{:02}:{:02} nazhigai ({:.1}% of cycle, {})",
                    vt.nazhigai,
                    vt.vinazhigai,
                    vt.percent_elapsed * 100.0,
                    if vt.is_daytime { "day" } else { "night" }
                );
                println!(
                    "sunrise {} / sunset {} [{:?}]",
                    vt.sunrise.with_timezone(&tz),
                    vt.sunset.with_timezone(&tz),
                    vt.provenance
                );
            }
        }

        Commands::TamilDate => {
            let date = tamil_date(t, coord, tz, &provider, model);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&date)?);
            } else {
                println!("{} {} ({})", date.month, date.day, date.rasi.name());
                println!(
                    "sankranti {} / day 1 {} [{:?}]",
                    date.sankranti.with_timezone(&tz),
                    date.day_one,
                    date.provenance
                );
            }
        }

        Commands::VedicDate => {
            let vd = vedic_date(t, tz, model);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&vd)?);
            } else {
                println!(
                    "{} samvatsara (year {} of 60), {} maasa, day {}",
                    vd.samvatsara, vd.samvatsara_order, vd.maasa, vd.day_of_month
                );
                println!(
                    "{} ({:?} paksha, {:.0}% lit), {} nakshatra, {} ({})",
                    vd.tithi.name(),
                    vd.paksha,
                    vd.illumination * 100.0,
                    vd.nakshatra.name(),
                    vd.vara.tamil_name(),
                    vd.vara.english_name()
                );
            }
        }

        Commands::NextOccurrence { nazhigai, vinazhigai } => {
            let fire = next_occurrence(nazhigai, vinazhigai, t, coord, tz, &provider)
                .ok_or(CliError::NoSunrise)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&fire)?);
            } else {
                println!(
                    "{:02}:{:02} next fires at {} ({})",
                    nazhigai,
                    vinazhigai,
                    fire.with_timezone(&tz),
                    fire
                );
            }
        }

        Commands::Sankranti { target } => {
            let sankranti = find_sankranti(target, t, model)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sankranti)?);
            } else {
                println!(
                    "sun crossed sidereal {target} deg at {} ({})",
                    sankranti.with_timezone(&tz),
                    sankranti
                );
            }
        }

        Commands::Sun => {
            let tropical = sun_longitude(t);
            let ayanamsa = ayanamsa_deg(model, t);
            let sidereal = sidereal_sun_longitude(t, model);
            let moon = moon_longitude(t);
            if cli.json {
                let out = serde_json::json!({
                    "sun_tropical_deg": tropical,
                    "sun_sidereal_deg": sidereal,
                    "moon_tropical_deg": moon,
                    "ayanamsa_deg": ayanamsa,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("sun tropical  {tropical:10.4} deg");
                println!("sun sidereal  {sidereal:10.4} deg");
                println!("moon tropical {moon:10.4} deg");
                println!("ayanamsa      {ayanamsa:10.4} deg");
            }
        }
    }
    Ok(())
}

use clap::Parser;
use clap::error::ErrorKind;
use janma_chart::{BirthInput, ChartCalculator};
use log::debug;

const USAGE: &str = "Usage: janma <date> <time> <lat> <lon> <timezone>";
const EXAMPLE: &str = "Example: janma 1992-03-15 14:30:00 29.7604 -95.3698 America/Chicago";

#[derive(Parser)]
#[command(
    name = "janma",
    version,
    about = "Sidereal (Lahiri) birth chart as JSON",
    allow_negative_numbers = true
)]
struct Cli {
    /// Birth date (YYYY-MM-DD)
    date: String,
    /// Local birth time, 24-hour (HH:MM:SS)
    time: String,
    /// Latitude in degrees, north positive
    latitude: String,
    /// Longitude in degrees, east positive
    longitude: String,
    /// IANA timezone, e.g. America/Chicago
    timezone: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                println!("{USAGE}");
                println!("{EXAMPLE}");
                std::process::exit(1);
            }
            _ => fail(&clap_message(&e)),
        },
    };

    match run(&cli) {
        Ok(json) => println!("{json}"),
        Err(msg) => fail(&msg),
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let latitude = parse_coordinate("latitude", &cli.latitude)?;
    let longitude = parse_coordinate("longitude", &cli.longitude)?;
    let input = BirthInput::parse(&cli.date, &cli.time, latitude, longitude, &cli.timezone)
        .map_err(|e| e.to_string())?;
    let calc = ChartCalculator::new(input).map_err(|e| e.to_string())?;
    let chart = calc.calculate_chart().map_err(|e| e.to_string())?;
    debug!("computed at {}", chart.metadata.computed_at_string());
    chart.to_json_pretty().map_err(|e| e.to_string())
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid {name} '{raw}': expected decimal degrees"))
}

/// First line of a clap error, without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Report `msg` as a one-line JSON object on stderr and exit 1.
fn fail(msg: &str) -> ! {
    eprintln!("{}", serde_json::json!({ "error": msg }));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "janma",
            "1992-03-15",
            "14:30:00",
            "-33.8688",
            "-151.2093",
            "Australia/Sydney",
        ])
        .unwrap();
        assert_eq!(parse_coordinate("latitude", &cli.latitude), Ok(-33.8688));
        assert_eq!(parse_coordinate("longitude", &cli.longitude), Ok(-151.2093));
    }

    #[test]
    fn missing_arguments_kind() {
        let err = Cli::try_parse_from(["janma", "1992-03-15"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn non_numeric_coordinate() {
        let err = parse_coordinate("latitude", "north").unwrap_err();
        assert_eq!(err, "invalid latitude 'north': expected decimal degrees");
    }

    #[test]
    fn run_reports_unknown_timezone() {
        let cli = Cli::try_parse_from([
            "janma",
            "1992-03-15",
            "14:30:00",
            "29.7604",
            "-95.3698",
            "Nowhere/Fake",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.contains("Nowhere/Fake"), "{err}");
    }
}

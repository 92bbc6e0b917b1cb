use anyhow::Context;
use clap::{builder::ValueParser, Arg, ArgAction, ArgMatches, Command};
use geodist::{calculate, CalculationMethod, GeoPoint};
use std::ffi::{OsStr, OsString};
use tracing::{error, trace};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = parse_cmdline(std::env::args_os());
    if let Err(e) = run(config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    trace!(
        "from {} to {}, mode = '{}', strict = {}",
        config.from,
        config.to,
        config.mode,
        config.strict
    );

    let calc = calculate(config.from, config.to, &config.mode, config.strict)
        .with_context(|| format!("failed to calculate with mode '{}'", config.mode))?;
    println!("{calc}");

    Ok(())
}

struct Config {
    from: GeoPoint,
    to: GeoPoint,
    mode: String,
    strict: bool,
}

/// Options that were historically spelled with a single dash.
const LEGACY_OPTIONS: [&str; 6] = ["lat", "lng", "tlat", "tlng", "mode", "help"];

/// Rewrite `-lat 1.0` and `-lat=1.0` into their `--lat` form so clap accepts them.
fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| legacy_to_long(&arg).unwrap_or(arg))
        .collect()
}

fn legacy_to_long(arg: &OsStr) -> Option<OsString> {
    let s = arg.to_str()?;
    let rest = s.strip_prefix('-').filter(|r| !r.starts_with('-'))?;
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_OPTIONS
        .contains(&name)
        .then(|| OsString::from(format!("-{s}")))
}

fn build_command() -> Command {
    let modes = CalculationMethod::ALL
        .iter()
        .map(|m| format!("{}: {}", m.token(), m.label()))
        .collect::<Vec<_>>()
        .join(" | ");

    let coord = |id: &'static str, default: &'static str, help: &'static str| {
        Arg::new(id)
            .long(id)
            .value_name("DEGREES")
            .default_value(default)
            .allow_negative_numbers(true)
            .value_parser(ValueParser::new(parse_degrees))
            .help(help)
    };

    Command::new("geodist")
        .version("0.1.0")
        .about("Calculates the distance and azimuth between two latitude/longitude points.")
        .arg(coord("lat", "0.0", "Origin latitude in decimal degrees."))
        .arg(coord("lng", "0.0", "Origin longitude in decimal degrees."))
        .arg(coord("tlat", "11.1", "Target latitude in decimal degrees."))
        .arg(coord("tlng", "135.5", "Target longitude in decimal degrees."))
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .default_value("g")
                .help(format!("Calculation method ({modes}).")),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail on an unknown mode instead of reporting 'No selected'."),
        )
}

fn parse_degrees(s: &str) -> anyhow::Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("invalid decimal degrees '{s}'"))
}

fn parse_cmdline<I>(args: I) -> Config
where
    I: IntoIterator<Item = OsString>,
{
    let m = build_command().get_matches_from(normalize_legacy_args(args));
    config_from_matches(&m)
}

fn config_from_matches(m: &ArgMatches) -> Config {
    // Every value option has a default, so lookups always succeed.
    let degrees = |id: &str| m.get_one::<f64>(id).copied().unwrap_or_default();
    Config {
        from: GeoPoint::new(degrees("lat"), degrees("lng")),
        to: GeoPoint::new(degrees("tlat"), degrees("tlng")),
        mode: m.get_one::<String>("mode").cloned().unwrap_or_default(),
        strict: m.get_flag("strict"),
    }
}

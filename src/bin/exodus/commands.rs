use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use exodus_calendar::{MarsClock, TimeConvention, add_delta, parse_earth, timedelta};
use tracing::info;

use crate::cli::Command;

const TO_MARS_EXAMPLE: &str = "exodus to-mars '2025-01-01 00:00:01+00:00'";
const TO_EARTH_EXAMPLE: &str = "exodus to-earth '0030-03-51 12:26:45.556'";
const DELTA_EXAMPLE: &str = "exodus delta '0001-01-01 00:00:00.000' '0001-01-01 00:00:01.000'";
const ADD_EXAMPLE: &str = "exodus add '0001-01-01 00:00:00.000' 1000";

/// Runs one subcommand and returns the text to print.
pub fn run(command: &Command, clock: &MarsClock) -> Result<String> {
    info!(epoch = %clock.epoch(), convention = %clock.convention(), "using clock");
    match command {
        Command::ToMars { earth } => to_mars(earth, clock),
        Command::ToEarth { mars } => to_earth(mars, clock),
        Command::Now => Ok(now(clock, Utc::now())),
        Command::Delta { start, end } => delta(start, end, clock.convention()),
        Command::Add { timestamp, delta } => add(timestamp, *delta, clock.convention()),
    }
}

fn usage(example: &str) -> String {
    format!("input is not in the correct format, correct example: {example}")
}

fn to_mars(earth: &str, clock: &MarsClock) -> Result<String> {
    let instant = parse_earth(earth).with_context(|| usage(TO_MARS_EXAMPLE))?;
    Ok(clock.to_mars(instant).to_string())
}

fn to_earth(mars: &str, clock: &MarsClock) -> Result<String> {
    let instant = clock.parse_mars(mars).with_context(|| usage(TO_EARTH_EXAMPLE))?;
    Ok(format_earth(instant))
}

fn now(clock: &MarsClock, instant: DateTime<Utc>) -> String {
    let earth = clock.with_convention(TimeConvention::Earth).to_mars(instant);
    let mtc = clock.with_convention(TimeConvention::Mtc).to_mars(instant);
    format!("{}\n{earth}\n{mtc}", format_earth(instant))
}

fn delta(start: &str, end: &str, convention: TimeConvention) -> Result<String> {
    let millis = timedelta(start, end, convention).with_context(|| usage(DELTA_EXAMPLE))?;
    Ok(millis.to_string())
}

fn add(timestamp: &str, delta: i64, convention: TimeConvention) -> Result<String> {
    add_delta(timestamp, delta, convention).with_context(|| usage(ADD_EXAMPLE))
}

fn format_earth(instant: DateTime<Utc>) -> String {
    format!("Earth DateTime: {}", instant.format("%Y-%m-%d %H:%M:%S%.3f, %A"))
}

//! Textual duration codec (`300ms`, `1h30m`, `1.5s`).
//!
//! Accepted units are `ns`, `us` (also `µs`), `ms`, `s`, `m` and `h`. A
//! duration is a sequence of decimal numbers, each with an optional fraction
//! and a mandatory unit. Rendering uses the largest units first and always
//! spells out trailing minutes and seconds once hours or minutes appear
//! (`1h0m0s`).

use std::time::Duration;

use super::scalar::split_sign;
use super::{Kind, Scalar};
use crate::error::SetError;

const NANOS_PER_SEC: u128 = 1_000_000_000;
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn overflow() -> String {
    String::from("duration out of range")
}

fn take_digits<I>(chars: &mut std::iter::Peekable<I>) -> Result<(u128, usize), String>
where
    I: Iterator<Item = char>,
{
    let mut value: u128 = 0;
    let mut count = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or_else(overflow)?;
        count += 1;
    }
    Ok((value, count))
}

fn take_fraction<I>(chars: &mut std::iter::Peekable<I>) -> (u128, u128, usize)
where
    I: Iterator<Item = char>,
{
    let (mut fraction, mut scale, mut count) = (0_u128, 1_u128, 0_usize);
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        if count < MAX_FRACTION_DIGITS {
            fraction = fraction * 10 + u128::from(digit);
            scale *= 10;
        }
        count += 1;
    }
    (fraction, scale, count)
}

/// Parses a textual duration.
///
/// # Errors
///
/// Returns a description of the problem for empty input, a number without
/// a unit, an unknown unit, a negative duration, or overflow.
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    let (negative, unsigned) = split_sign(raw);
    if unsigned == "0" {
        return Ok(Duration::ZERO);
    }
    if unsigned.is_empty() {
        return Err(String::from("empty duration"));
    }

    let mut chars = unsigned.chars().peekable();
    let mut total: u128 = 0;
    while chars.peek().is_some() {
        let (whole, whole_digits) = take_digits(&mut chars)?;
        let (fraction, scale, fraction_digits) = if chars.peek() == Some(&'.') {
            chars.next();
            take_fraction(&mut chars)
        } else {
            (0, 1, 0)
        };
        if whole_digits == 0 && fraction_digits == 0 {
            return Err(String::from("expected a number"));
        }

        let mut unit = String::new();
        while let Some(c) = chars.next_if(|c| *c != '.' && !c.is_ascii_digit()) {
            unit.push(c);
        }
        if unit.is_empty() {
            return Err(String::from("missing unit"));
        }
        let per_unit = unit_nanos(&unit).ok_or_else(|| format!("unknown unit '{unit}'"))?;

        let part = whole
            .checked_mul(per_unit)
            .and_then(|v| v.checked_add((fraction * per_unit).div_euclid(scale)))
            .ok_or_else(overflow)?;
        total = total.checked_add(part).ok_or_else(overflow)?;
    }

    if negative && total != 0 {
        return Err(String::from("negative durations are not supported"));
    }
    let secs = u64::try_from(total.div_euclid(NANOS_PER_SEC)).map_err(|_| overflow())?;
    let nanos = u32::try_from(total.rem_euclid(NANOS_PER_SEC)).map_err(|_| overflow())?;
    Ok(Duration::new(secs, nanos))
}

/// Renders `value / unit` with the fraction trimmed of trailing zeros.
fn decimal(value: u128, unit: u128, width: usize) -> String {
    let whole = value.div_euclid(unit);
    let rest = value.rem_euclid(unit);
    if rest == 0 {
        return whole.to_string();
    }
    let fraction = format!("{rest:0width$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

/// Renders a duration in the same notation [`parse_duration`] accepts.
pub(crate) fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return String::from("0s");
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 1_000, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, 1_000_000, 6));
    }

    let total_secs = duration.as_secs();
    let hours = total_secs.div_euclid(3_600);
    let minutes = total_secs.div_euclid(60).rem_euclid(60);
    let secs = u128::from(total_secs.rem_euclid(60));
    let seconds = decimal(
        secs * NANOS_PER_SEC + u128::from(duration.subsec_nanos()),
        NANOS_PER_SEC,
        9,
    );
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

impl Scalar for Duration {
    const KIND: Kind = Kind::Duration;

    fn parse(raw: &str) -> Result<Self, SetError> {
        parse_duration(raw).map_err(|reason| SetError::parse(Kind::Duration, raw, reason))
    }

    fn render(&self) -> String {
        format_duration(*self)
    }
}

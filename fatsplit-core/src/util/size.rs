use crate::error::{Result, SplitError};

/// Suffix → multiplier, longest suffix first so `kib` wins over `b` and `k`.
const SUFFIXES: &[(&str, u64)] = &[
    ("kib", 1 << 10),
    ("mib", 1 << 20),
    ("gib", 1 << 30),
    ("tib", 1 << 40),
    ("kb", 1_000),
    ("mb", 1_000_000),
    ("gb", 1_000_000_000),
    ("tb", 1_000_000_000_000),
    ("ki", 1 << 10),
    ("mi", 1 << 20),
    ("gi", 1 << 30),
    ("ti", 1 << 40),
    ("k", 1_000),
    ("m", 1_000_000),
    ("g", 1_000_000_000),
    ("t", 1_000_000_000_000),
    ("b", 1),
];

// fractional digits beyond this are dropped before scaling
const MAX_FRACTION_DIGITS: usize = 18;

fn invalid(input: &str, reason: &'static str) -> SplitError {
    SplitError::InvalidSize {
        input: input.to_string(),
        reason,
    }
}

/// Parse a byte count such as `"1024"`, `"2G"`, `"1.5GB"` or `"512MiB"`.
///
/// `K/M/G/T` (optionally followed by `B`) are decimal powers of 1000,
/// `Ki/Mi/Gi/Ti` (optionally followed by `B`) are binary powers of 1024.
/// Matching is case-insensitive; the result must be a positive number of bytes.
pub fn parse_size(input: &str) -> Result<u64> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(invalid(input, "size is empty"));
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        let n: u64 = s
            .parse()
            .map_err(|_| invalid(input, "size does not fit in 64 bits"))?;
        if n == 0 {
            return Err(invalid(input, "size must be positive"));
        }
        return Ok(n);
    }

    let (number, multiplier) = SUFFIXES
        .iter()
        .find_map(|&(suffix, mult)| s.strip_suffix(suffix).map(|rest| (rest.trim_end(), mult)))
        .ok_or_else(|| {
            invalid(
                input,
                "size must be an integer byte count or end with K/M/G/T (optionally KiB/MiB/GiB/TiB)",
            )
        })?;

    let bytes = scale_decimal(number, multiplier).ok_or_else(|| invalid(input, "malformed number"))?;
    if bytes == 0 {
        return Err(invalid(input, "size must be positive"));
    }
    u64::try_from(bytes).map_err(|_| invalid(input, "size does not fit in 64 bits"))
}

/// `number * multiplier` for a plain decimal like `"12"` or `"1.25"`, truncated to whole bytes.
fn scale_decimal(number: &str, multiplier: u64) -> Option<u128> {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let mult = multiplier as u128;
    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let whole = int_value.checked_mul(mult)?;

    let frac = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
    if frac.is_empty() {
        return Some(whole);
    }
    let frac_value: u128 = frac.parse().ok()?;
    let scale = 10u128.pow(frac.len() as u32);
    whole.checked_add(frac_value * mult / scale)
}

/// Decimal, Finder-style size string: `"4.00 GB"`.
pub fn human_readable_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    for (i, unit) in UNITS.iter().enumerate() {
        if value < 1000.0 || i == UNITS.len() - 1 {
            return format!("{value:.2} {unit}");
        }
        value /= 1000.0;
    }
    format!("{size} B")
}

//! Human-readable byte sizes.
//!
//! A size is scaled by 1024 while it is strictly greater than 1024, so exactly
//! 1024 bytes prints as `1024.0 B`. The scaled value is reduced to 15
//! significant digits and then rounded half away from zero at the requested
//! precision, with `.` as the decimal separator on every locale.

use std::fmt;

/// Unit labels, one per power of 1024.
pub const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Fractional digits used by [`format_size`].
pub const DEFAULT_PRECISION: u32 = 1;

const SIGNIFICANT_DIGITS: usize = 15;

/// Format a byte count with one fractional digit, e.g. `"64.0 KB"`.
pub fn format_size(size: u64) -> String {
    format_size_with_precision(size, DEFAULT_PRECISION)
}

/// Format a byte count with `precision` fractional digits.
///
/// A precision of zero omits the decimal point.
pub fn format_size_with_precision(size: u64, precision: u32) -> String {
    SizeDisplay::new(size).precision(precision).to_string()
}

/// `Display` adapter for a byte count.
///
/// ```
/// use wirefmt_format::SizeDisplay;
///
/// assert_eq!(SizeDisplay::new(65_535).to_string(), "64.0 KB");
/// assert_eq!(SizeDisplay::new(65_535).precision(2).to_string(), "64.00 KB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeDisplay {
    size: u64,
    precision: u32,
}

impl SizeDisplay {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the number of fractional digits.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

impl fmt::Display for SizeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = scale(self.size);
        write!(
            f,
            "{} {}",
            render_fixed(value, self.precision as usize),
            UNITS[unit]
        )
    }
}

fn scale(size: u64) -> (f64, usize) {
    let mut value = size as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    (value, unit)
}

/// Render a non-negative value with exactly `precision` fractional digits.
fn render_fixed(value: f64, precision: usize) -> String {
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: isize = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    // Number of digits before the decimal point.
    let mut point = exponent + 1;

    let keep = point + precision as isize;
    if keep < 0 {
        digits.clear();
    } else if (keep as usize) < digits.len() {
        let keep = keep as usize;
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up && carry(&mut digits) {
            digits.insert(0, 1);
            point += 1;
        }
    }

    let digit_at = |index: isize| -> char {
        usize::try_from(index)
            .ok()
            .and_then(|i| digits.get(i))
            .map_or('0', |&d| char::from(b'0' + d))
    };

    let mut out = String::with_capacity(precision + 8);
    if point <= 0 {
        out.push('0');
    } else {
        out.extend((0..point).map(digit_at));
    }
    if precision > 0 {
        out.push('.');
        out.extend((point..point + precision as isize).map(digit_at));
    }
    out
}

/// Add one to the last digit; returns true when the carry overflows.
fn carry(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

//! Number parsing and formatting for stream labels.
//!
//! Frame rates and aspect ratios arrive from the probe as strings
//! ("30000/1001", "16:9"). They are parsed explicitly here; nothing is
//! ever evaluated as an expression.

use thiserror::Error;

/// Errors from parsing probe-provided numeric strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid aspect ratio: {0:?}")]
    InvalidAspectRatio(String),

    #[error("Invalid frame rate: {0:?}")]
    InvalidFrameRate(String),
}

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Parse a "W:H" display aspect ratio into W/H rounded to 3 places.
pub fn parse_aspect_ratio(ratio: &str) -> FormatResult<f64> {
    let invalid = || FormatError::InvalidAspectRatio(ratio.to_string());

    let (w, h) = ratio.trim().split_once(':').ok_or_else(invalid)?;
    let w: u32 = w.trim().parse().map_err(|_| invalid())?;
    let h: u32 = h.trim().parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }

    Ok(round_to(f64::from(w) / f64::from(h), 3))
}

/// Parse a frame rate given as "num/den" or a plain number, rounded to 3 places.
pub fn parse_frame_rate(rate: &str) -> FormatResult<f64> {
    let invalid = || FormatError::InvalidFrameRate(rate.to_string());
    let parse = |s: &str| s.trim().parse::<f64>().map_err(|_| invalid());

    let value = match rate.trim().split_once('/') {
        Some((num, den)) => {
            let num = parse(num)?;
            let den = parse(den)?;
            if den == 0.0 {
                return Err(invalid());
            }
            num / den
        }
        None => parse(rate)?,
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(invalid());
    }

    Ok(round_to(value, 3))
}

/// Sample rate in kHz rounded to 1 place (48000 -> 48.0).
pub fn sample_rate_khz(sample_rate: u32) -> f64 {
    round_to(f64::from(sample_rate) / 1000.0, 1)
}

/// Render a rounded value with trailing zeros trimmed, keeping one decimal.
///
/// `29.970` renders as "29.97", `48.0` as "48.0", `25` as "25.0".
pub fn decimal(value: f64, places: usize) -> String {
    let fixed = format!("{:.*}", places, value);
    if !fixed.contains('.') {
        return format!("{}.0", fixed);
    }
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Significant digits used by the default stream rendering of floating point values.
const PRECISION: i32 = 6;

/// Renders `v` the way a default-configured text stream does (`%g` with 6 significant digits).
///
/// Fixed notation is used for decimal exponents in `[-4, 6)`, exponent notation
/// (`1e+20`, `1.5e-07`) otherwise. Trailing zeros of the fraction are dropped.
///
/// # Examples
/// ```
/// use xlog_model::format_general;
///
/// assert_eq!(format_general(3.14), "3.14");
/// assert_eq!(format_general(1e20), "1e+20");
/// assert_eq!(format_general(3.14159265), "3.14159");
/// ```
pub fn format_general(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // exponent after rounding to PRECISION significant digits
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

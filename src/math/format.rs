use std::fmt::Write;

/// Values closer to zero than this are printed as zero.
const NEAR_ZERO: f64 = 0.001;

/// Formats a vector as `[a, b, c]`.
///
/// With `decimals == None` values use their shortest representation;
/// otherwise they are printed with that many decimals. Values within
/// `NEAR_ZERO` of zero print as `0`.
pub fn format_vector(values: &[f64], decimals: Option<usize>) -> String {
    let mut out = String::from("[");
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let v = if v.abs() < NEAR_ZERO { 0.0 } else { v };
        // Writing into a String cannot fail.
        let _ = match decimals {
            Some(d) => write!(out, "{v:.d$}"),
            None => write!(out, "{v}"),
        };
    }
    out.push(']');
    out
}

/// Formats a matrix as `[[..], [..]]`, one bracketed vector per row.
pub fn format_matrix(rows: &[Vec<f64>], decimals: Option<usize>) -> String {
    let inner: Vec<String> = rows.iter().map(|r| format_vector(r, decimals)).collect();
    format!("[{}]", inner.join(", "))
}

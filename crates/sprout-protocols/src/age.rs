//! Display labels for item ages. Labels are derived from `age_months` and
//! never used for ordering or scoring.

/// Band edges in months. Six-month bands up to two years, yearly after.
const BAND_EDGES: [u32; 9] = [0, 6, 12, 18, 24, 36, 48, 60, 72];

/// Label the age band an item age falls into, upper bound inclusive.
///
/// `age_band_label(10)` is `"6-12 months"`; `age_band_label(0)` is `"0-6 months"`.
pub fn age_band_label(age_months: u32) -> String {
    let (lower, upper) = age_band(age_months);
    format!("{lower}-{upper} months")
}

/// The `(lower, upper]` band bounds for an age. Age 0 falls into the first band.
pub fn age_band(age_months: u32) -> (u32, u32) {
    if age_months == 0 {
        return (BAND_EDGES[0], BAND_EDGES[1]);
    }
    for pair in BAND_EDGES.windows(2) {
        if age_months <= pair[1] {
            return (pair[0], pair[1]);
        }
    }
    let last = BAND_EDGES[BAND_EDGES.len() - 1];
    let years_past = (age_months - last - 1) / 12;
    let lower = last + years_past * 12;
    (lower, lower + 12)
}

/// Format a month count as years and months, e.g. `"2y 6m"`.
pub fn format_years_months(months: f64) -> String {
    let rounded = months.round().max(0.0) as u32;
    let (years, rest) = (rounded / 12, rounded % 12);
    match (years, rest) {
        (0, m) => format!("{m}m"),
        (y, 0) => format!("{y}y"),
        (y, m) => format!("{y}y {m}m"),
    }
}

//! Utility functions for UI components

/// Format a rating with exactly two decimal places, rounding halves away
/// from zero.
///
/// `{:.2}` rounds exact ties to even. A float sits exactly halfway between
/// two hundredths only when eight times it is an odd integer (8.125, 0.375),
/// so those values are nudged past the tie before formatting.
pub fn format_rating(rating: f64) -> String {
    let eighths = rating * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if is_tie {
        format!("{:.2}", rating + rating.signum() * 0.001)
    } else {
        format!("{:.2}", rating)
    }
}

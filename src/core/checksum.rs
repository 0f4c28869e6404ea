/// Weights applied to digits 0-8 when computing the control digit.
pub const WEIGHTS: [i32; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

/// Compute the control (10th) digit from the first nine digits.
///
/// The weighted sum can be negative because the first weight is -1, so the
/// modulo 11 step uses `rem_euclid` to land in `0..=10` before folding 10
/// onto 0.
pub fn control_digit(digits: &[u8; 9]) -> u8 {
    let sum: i32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| i32::from(d) * w)
        .sum();
    (sum.rem_euclid(11) % 10) as u8
}

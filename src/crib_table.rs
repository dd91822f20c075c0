//! Precomputed expected crib values for discarded rank pairs.
//!
//! External data for the discard advisor: mean crib scores observed for each
//! unordered pair of discarded ranks, one table for discarding to your own
//! crib and one for the opponent's. Rows and columns are indexed by
//! `rank - 1`; both tables are symmetric.

/// Looks up the expected crib value of discarding two ranks.
///
/// The value is negated when the crib belongs to the opponent, since those
/// points count against the discarding player.
pub(crate) fn expected_value(rank_a: u8, rank_b: u8, players_crib: bool) -> f64 {
    let (a, b) = (usize::from(rank_a - 1), usize::from(rank_b - 1));
    if players_crib {
        PLAYER_CRIB[a][b]
    } else {
        -OPPONENT_CRIB[a][b]
    }
}

/// Mean crib score when the discarding player owns the crib.
const PLAYER_CRIB: [[f64; 13]; 13] = [
    [5.38, 4.23, 4.52, 5.43, 5.45, 3.85, 3.85, 3.80, 3.40, 3.42, 3.65, 3.42, 3.41],
    [4.23, 4.34, 4.97, 4.97, 5.45, 3.87, 3.85, 3.80, 3.58, 3.43, 3.65, 3.43, 3.42],
    [4.52, 4.97, 5.94, 4.97, 5.97, 3.90, 3.85, 3.80, 3.59, 3.45, 3.65, 3.45, 3.44],
    [5.43, 4.97, 4.97, 5.67, 6.48, 3.87, 3.85, 3.80, 3.60, 3.46, 3.65, 3.46, 3.45],
    [5.45, 5.45, 5.97, 6.48, 8.79, 6.63, 6.01, 5.48, 5.43, 6.66, 7.00, 6.66, 6.66],
    [3.85, 3.87, 3.90, 3.87, 6.63, 5.76, 4.98, 4.63, 5.13, 3.17, 3.65, 3.19, 3.16],
    [3.85, 3.85, 3.85, 3.85, 6.01, 4.98, 5.92, 6.53, 4.04, 3.23, 3.65, 3.23, 3.22],
    [3.80, 3.80, 3.80, 3.80, 5.48, 4.63, 6.53, 5.45, 4.72, 3.80, 3.65, 3.24, 3.23],
    [3.40, 3.58, 3.59, 3.60, 5.43, 5.13, 4.04, 4.72, 5.16, 4.29, 3.97, 3.21, 3.20],
    [3.42, 3.43, 3.45, 3.46, 6.66, 3.17, 3.23, 3.80, 4.29, 4.76, 4.61, 3.31, 3.26],
    [3.65, 3.65, 3.65, 3.65, 7.00, 3.65, 3.65, 3.65, 3.97, 4.61, 5.33, 4.57, 3.97],
    [3.42, 3.43, 3.45, 3.46, 6.66, 3.19, 3.23, 3.24, 3.21, 3.31, 4.57, 4.68, 3.31],
    [3.41, 3.42, 3.44, 3.45, 6.66, 3.16, 3.22, 3.23, 3.20, 3.26, 3.97, 3.31, 4.08],
];

/// Mean crib score when the opponent owns the crib.
const OPPONENT_CRIB: [[f64; 13]; 13] = [
    [5.08, 3.93, 4.10, 5.01, 5.21, 3.43, 3.43, 3.38, 2.98, 3.00, 3.23, 3.00, 2.99],
    [3.93, 4.04, 4.67, 4.55, 5.21, 3.45, 3.43, 3.38, 3.16, 3.01, 3.23, 3.01, 3.00],
    [4.10, 4.67, 5.64, 4.67, 5.73, 3.48, 3.43, 3.38, 3.17, 3.03, 3.23, 3.03, 3.02],
    [5.01, 4.55, 4.67, 5.37, 6.36, 3.45, 3.43, 3.38, 3.18, 3.04, 3.23, 3.04, 3.03],
    [5.21, 5.21, 5.73, 6.36, 8.67, 6.51, 5.77, 5.24, 5.19, 6.42, 6.76, 6.42, 6.42],
    [3.43, 3.45, 3.48, 3.45, 6.51, 5.46, 4.68, 4.21, 4.71, 2.75, 3.23, 2.77, 2.75],
    [3.43, 3.43, 3.43, 3.43, 5.77, 4.68, 5.62, 6.23, 3.62, 2.81, 3.23, 2.81, 2.80],
    [3.38, 3.38, 3.38, 3.38, 5.24, 4.21, 6.23, 5.15, 4.42, 3.38, 3.23, 2.82, 2.81],
    [2.98, 3.16, 3.17, 3.18, 5.19, 4.71, 3.62, 4.42, 4.86, 3.99, 3.55, 2.79, 2.78],
    [3.00, 3.01, 3.03, 3.04, 6.42, 2.75, 2.81, 3.38, 3.99, 4.46, 4.31, 2.89, 2.84],
    [3.23, 3.23, 3.23, 3.23, 6.76, 3.23, 3.23, 3.23, 3.55, 4.31, 5.03, 4.27, 3.55],
    [3.00, 3.01, 3.03, 3.04, 6.42, 2.77, 2.81, 2.82, 2.79, 2.89, 4.27, 4.38, 3.01],
    [2.99, 3.00, 3.02, 3.03, 6.42, 2.75, 2.80, 2.81, 2.78, 2.84, 3.55, 3.01, 3.78],
];

//! Log-normal metric scoring.
//!
//! A metric timing is scored against two calibration points: the point of
//! diminishing returns (scored at [`PODR_SCORE`]) and the median threshold
//! (scored at 0.5). The curve between them is the complementary CDF of a
//! log-normal distribution fitted to those points, so the score decreases
//! smoothly and monotonically as the timing grows.

mod curve;
mod statistics;

pub use curve::{log_normal_score, PODR_SCORE};
pub(crate) use statistics::{inverse_normal_cdf, normal_cdf};

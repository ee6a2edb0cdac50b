use std::ops::RangeInclusive;

use super::FloatNum;

// unlike `FloatNum::clamp`, never panics when the range is inverted, start wins
pub(crate) fn limit_at_range(value: FloatNum, range: RangeInclusive<FloatNum>) -> FloatNum {
    if &value < range.start() {
        *range.start()
    } else if &value > range.end() {
        *range.end()
    } else {
        value
    }
}

#[cfg(test)]
pub(crate) fn is_approx_eq(a: FloatNum, b: FloatNum, tolerance: FloatNum) -> bool {
    (a - b).abs() <= tolerance
}

//! Player level to starting hit points.

/// Highest supported player level.
pub const MAX_LEVEL: i32 = 150;

/// Starting hp of each decade (levels 1, 11, 21, ...) and the per-level step
/// within it.
const DECADES: [(i32, i32); 15] = [
    (1000, 70),
    (1800, 80),
    (2800, 90),
    (4000, 100),
    (5400, 110),
    (7000, 120),
    (8800, 130),
    (10800, 140),
    (13000, 150),
    (15400, 160),
    (18000, 170),
    (20800, 180),
    (23800, 190),
    (27000, 200),
    (30400, 210),
];

/// Starting hp for `level`, or `None` outside `1..=MAX_LEVEL`.
pub fn hp_for_level(level: i32) -> Option<i32> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return None;
    }
    let decade = ((level - 1) / 10) as usize;
    let (start, step) = DECADES[decade];
    Some(start + ((level - 1) % 10) * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels() {
        assert_eq!(hp_for_level(1), Some(1000));
        assert_eq!(hp_for_level(10), Some(1630));
        assert_eq!(hp_for_level(11), Some(1800));
        assert_eq!(hp_for_level(61), Some(8800));
        assert_eq!(hp_for_level(100), Some(16840));
        assert_eq!(hp_for_level(150), Some(32290));
    }

    #[test]
    fn out_of_range_levels() {
        assert_eq!(hp_for_level(0), None);
        assert_eq!(hp_for_level(151), None);
        assert_eq!(hp_for_level(-3), None);
    }

    #[test]
    fn hp_grows_with_level() {
        for level in 2..=MAX_LEVEL {
            assert!(hp_for_level(level) > hp_for_level(level - 1));
        }
    }
}

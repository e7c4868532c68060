use super::*;

#[test]
fn breaks_duration_into_components() {
    // 2 days, 3 hours, 4 minutes, 5 seconds.
    let ms = ((((2 * 24 + 3) * 60 + 4) * 60) + 5) * 1000;
    let left = TimeLeft::from_millis(ms);
    assert_eq!(left, TimeLeft { days: 2, hours: 3, minutes: 4, seconds: 5 });
}

#[test]
fn sub_second_remainder_truncates() {
    let left = TimeLeft::from_millis(1999);
    assert_eq!(left, TimeLeft { days: 0, hours: 0, minutes: 0, seconds: 1 });
}

#[test]
fn elapsed_clamps_to_zero() {
    assert_eq!(TimeLeft::from_millis(0), TimeLeft::default());
    assert_eq!(TimeLeft::from_millis(-5000), TimeLeft::default());
    assert!(TimeLeft::from_millis(-1).is_finished());
}

#[test]
fn component_ranges_stay_in_bounds() {
    for ms in [1, 59_999, 3_599_999, 86_399_999, 200_000_000] {
        let left = TimeLeft::from_millis(ms);
        assert!(left.hours < 24);
        assert!(left.minutes < 60);
        assert!(left.seconds < 60);
    }
}

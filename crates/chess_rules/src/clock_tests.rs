use super::*;

#[test]
fn test_tick_counts_down() {
    let mut clock = Clock::new(3);
    clock.tick();
    assert_eq!(clock.remaining(), 2);
}

#[test]
fn test_tick_floors_at_zero() {
    let mut clock = Clock::new(1);
    clock.tick();
    clock.tick();
    clock.tick();
    assert_eq!(clock.remaining(), 0);
}

#[test]
fn test_expiry_threshold() {
    let mut clock = Clock::new(2);
    assert!(!clock.is_expired(0));
    clock.tick();
    clock.tick();
    assert!(clock.is_expired(0));
    // a configured threshold trips earlier
    assert!(Clock::new(30).is_expired(30));
}

#[test]
fn test_display_is_zero_padded() {
    assert_eq!(Clock::new(20 * 60).display(), "20:00");
    assert_eq!(Clock::new(59).display(), "00:59");
    assert_eq!(Clock::new(61).display(), "01:01");
    assert_eq!(Clock::new(0).display(), "00:00");
}

#[test]
fn test_default_clock() {
    assert_eq!(Clock::default().remaining(), DEFAULT_GAME_SECONDS);
}

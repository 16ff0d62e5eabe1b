use super::*;

fn run_to_completion(mut counter: Counter) -> (Counter, u32) {
    let mut ticks = 0;
    while counter.tick() {
        ticks += 1;
        assert!(ticks < 1000, "counter never finished");
    }
    (counter, ticks + 1)
}

// =============================================================
// Final value
// =============================================================

#[test]
fn counter_lands_exactly_on_target() {
    for target in [1, 24, 50, 137, 500] {
        let (done, _) = run_to_completion(Counter::new(target));
        assert_eq!(done.current, target, "target {target}");
    }
}

#[test]
fn counter_never_overshoots_mid_run() {
    let mut counter = Counter::new(137);
    loop {
        let more = counter.tick();
        assert!(counter.current <= counter.target);
        if !more {
            break;
        }
    }
}

#[test]
fn counter_finishes_in_about_fifty_steps() {
    let (_, ticks) = run_to_completion(Counter::new(500));
    assert_eq!(ticks, 50);
}

// =============================================================
// Suffix
// =============================================================

#[test]
fn target_24_renders_slash_seven_suffix() {
    let (done, _) = run_to_completion(Counter::new(24));
    assert_eq!(done.label(), "24/7");
}

#[test]
fn other_targets_render_plus_suffix() {
    let (done, _) = run_to_completion(Counter::new(500));
    assert_eq!(done.label(), "500+");
    let (done, _) = run_to_completion(Counter::new(50));
    assert_eq!(done.label(), "50+");
}

#[test]
fn label_shows_progress_mid_run() {
    let mut counter = Counter::new(100);
    counter.tick();
    assert_eq!(counter.label(), "2+");
}

// =============================================================
// Timing
// =============================================================

#[test]
fn interval_divides_duration_by_target() {
    assert_eq!(Counter::new(24).interval_ms(), 2000 / 24);
    assert_eq!(Counter::new(500).interval_ms(), 4);
}

#[test]
fn zero_target_is_immediately_done() {
    let counter = Counter::new(0);
    assert!(counter.done());
    assert_eq!(counter.interval_ms(), 0);
}

use super::*;

fn ticked(alert: &mut Alert, n: u32) {
    for _ in 0..n {
        alert.tick();
    }
}

#[test]
fn new_alert_is_hidden() {
    let mut alert = Alert::new();
    assert!(!alert.is_active());
    assert!(alert.visible_text().is_none());
    alert.tick();
    assert!(alert.visible_text().is_none());
}

#[test]
fn animate_shows_text_immediately() {
    let mut alert = Alert::new();
    alert.animate("ISOMETRIC");
    assert!(alert.is_active());
    assert_eq!(alert.visible_text(), Some("ISOMETRIC"));
}

#[test]
fn blinks_every_animate_tick() {
    let mut alert = Alert::new();
    alert.animate("2D");
    let mut phases = Vec::new();
    for _ in 0..MAX_TICK {
        alert.tick();
        phases.push(alert.visible_text().is_some());
    }
    for (i, shown) in phases.iter().enumerate() {
        // Tick n lands in phase (n - 1) / ANIMATE_TICK; odd phases are lit.
        let phase = i / ANIMATE_TICK as usize;
        assert_eq!(*shown, phase % 2 == 1, "tick {}", i + 1);
    }
}

#[test]
fn hides_after_max_tick() {
    let mut alert = Alert::new();
    alert.animate("2D");
    ticked(&mut alert, MAX_TICK);
    assert!(alert.is_active());
    alert.tick();
    assert!(!alert.is_active());
    assert!(alert.visible_text().is_none());
    ticked(&mut alert, 50);
    assert!(alert.visible_text().is_none());
}

#[test]
fn animate_restarts_cycle_and_replaces_text() {
    let mut alert = Alert::new();
    alert.animate("ISOMETRIC");
    ticked(&mut alert, 70);
    alert.animate("2D");
    assert_eq!(alert.visible_text(), Some("2D"));
    ticked(&mut alert, MAX_TICK);
    assert!(alert.is_active());
}

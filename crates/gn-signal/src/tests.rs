//! Unit tests for gn-signal.

#[cfg(test)]
mod timing {
    use gn_core::Position;

    use crate::{SignalPhase, TrafficSignal};

    fn sample(signal: &mut TrafficSignal, n: usize) -> Vec<bool> {
        (0..n)
            .map(|_| {
                let red = signal.is_red();
                signal.advance();
                red
            })
            .collect()
    }

    #[test]
    fn three_red_three_green() {
        let mut s = TrafficSignal::new(Some(Position::new(1, 3)), 3, 3);
        assert_eq!(sample(&mut s, 6), [true, true, true, false, false, false]);
        // Second cycle repeats.
        assert_eq!(sample(&mut s, 6), [true, true, true, false, false, false]);
    }

    #[test]
    fn uneven_durations() {
        let mut s = TrafficSignal::new(None, 1, 4);
        assert_eq!(sample(&mut s, 5), [true, false, false, false, false]);
    }

    #[test]
    fn zero_cycle_is_never_red() {
        let mut s = TrafficSignal::new(Some(Position::ORIGIN), 0, 0);
        assert!(sample(&mut s, 4).iter().all(|&r| !r));
        assert_eq!(s.ticks_until_change(), None);
    }

    #[test]
    fn always_red_without_green() {
        let mut s = TrafficSignal::new(None, 2, 0);
        assert!(sample(&mut s, 5).iter().all(|&r| r));
        assert_eq!(s.phase(), SignalPhase::Red);
    }

    #[test]
    fn ticks_until_change_counts_down() {
        let mut s = TrafficSignal::new(None, 3, 2);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(s.ticks_until_change().unwrap());
            s.advance();
        }
        assert_eq!(seen, [3, 2, 1, 2, 1]);
    }

    #[test]
    fn huge_durations_saturate() {
        let mut s = TrafficSignal::new(None, u64::MAX, 1);
        assert_eq!(s.cycle_len(), u64::MAX);
        assert_eq!(sample(&mut s, 3), [true, true, true]);
        assert_eq!(s.ticks_until_change(), Some(u64::MAX - 3));
    }
}

#[cfg(test)]
mod position {
    use gn_core::{Position, Tick};

    use crate::TrafficSignal;

    #[test]
    fn holds_only_on_its_cell_while_red() {
        let cell = Position::new(2, 2);
        let mut s = TrafficSignal::new(Some(cell), 1, 1);
        assert!(s.holds(cell));
        assert!(!s.holds(Position::new(2, 3)));
        s.advance();
        assert!(!s.holds(cell));
    }

    #[test]
    fn unplaced_signal_holds_nothing() {
        let s = TrafficSignal::new(None, 3, 3);
        assert!(s.is_red());
        assert!(!s.holds(Position::ORIGIN));
    }

    #[test]
    fn repositioning_keeps_tick() {
        let mut s = TrafficSignal::new(Some(Position::new(0, 1)), 3, 3);
        s.advance();
        s.advance();
        s.set_position(Some(Position::new(4, 4)));
        assert_eq!(s.tick(), Tick(2));
        assert_eq!(s.position(), Some(Position::new(4, 4)));
        s.set_position(None);
        assert_eq!(s.tick(), Tick(2));
    }

    #[test]
    fn display_names_phase() {
        let s = TrafficSignal::new(Some(Position::new(1, 3)), 3, 3);
        assert_eq!(s.to_string(), "signal@(1, 3) red (T0)");
    }
}

mod tests {
    use myrtio_remote_light::{Duration, Instant, SignalLine, SignalMonitor, Transition};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_monitor_starts_off() {
        let line = SignalLine::new();
        let mut monitor = SignalMonitor::new(&line, at(0));

        assert!(!monitor.is_on(at(10)));
        assert_eq!(monitor.last_transition(), None);
        assert_eq!(monitor.time_since_off(at(10)), Duration::from_millis(10));
        assert_eq!(monitor.time_since_on(at(10)), Duration::from_millis(10));
    }

    #[test]
    fn test_on_transition_recorded_once() {
        let line = SignalLine::new();
        let mut monitor = SignalMonitor::new(&line, at(0));

        line.on_edge(true);
        assert!(monitor.is_on(at(100)));
        assert_eq!(monitor.last_on(), at(100));
        assert_eq!(monitor.last_transition(), Some(Transition::On));

        // Sustained on leaves the timestamp alone
        for ms in [150, 200, 5_000] {
            assert!(monitor.is_on(at(ms)));
            assert_eq!(monitor.last_on(), at(100));
        }
        assert_eq!(monitor.time_since_on(at(5_000)), Duration::from_millis(4_900));
        assert_eq!(monitor.last_off(), at(0));
    }

    #[test]
    fn test_off_transition_recorded_once() {
        let line = SignalLine::new();
        let mut monitor = SignalMonitor::new(&line, at(0));

        line.on_edge(true);
        monitor.is_on(at(100));
        line.on_edge(false);
        assert!(!monitor.is_on(at(300)));
        assert_eq!(monitor.last_off(), at(300));
        assert_eq!(monitor.last_transition(), Some(Transition::Off));

        for ms in [400, 900, 20_000] {
            assert!(!monitor.is_on(at(ms)));
            assert_eq!(monitor.last_off(), at(300));
        }
        assert_eq!(monitor.last_on(), at(100));
    }

    #[test]
    fn test_every_edge_pair_is_recorded() {
        let line = SignalLine::new();
        let mut monitor = SignalMonitor::new(&line, at(0));

        for cycle in 1..=5u64 {
            let on_at = cycle * 1_000;
            let off_at = on_at + 400;

            line.on_edge(true);
            monitor.is_on(at(on_at));
            monitor.is_on(at(on_at + 1));
            line.on_edge(false);
            monitor.is_on(at(off_at));
            monitor.is_on(at(off_at + 1));

            assert_eq!(monitor.last_on(), at(on_at));
            assert_eq!(monitor.last_off(), at(off_at));
        }
    }

    #[test]
    fn test_repeated_edge_same_level() {
        let line = SignalLine::new();
        let mut monitor = SignalMonitor::new(&line, at(0));

        line.on_edge(true);
        monitor.is_on(at(10));
        line.on_edge(true);
        monitor.is_on(at(20));

        assert_eq!(monitor.last_on(), at(10));
    }

    #[test]
    fn test_line_asserted_at_boot() {
        let line = SignalLine::new();
        line.on_edge(true);
        let mut monitor = SignalMonitor::new(&line, at(0));

        assert!(monitor.is_on(at(5)));
        assert_eq!(monitor.last_on(), at(5));
        assert_eq!(monitor.last_transition(), Some(Transition::On));
    }

    #[test]
    fn test_time_since_saturates() {
        let line = SignalLine::new();
        let monitor = SignalMonitor::new(&line, at(1_000));
        assert_eq!(monitor.time_since_off(at(500)), Duration::from_millis(0));
    }
}

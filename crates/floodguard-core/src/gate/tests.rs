
    use super::*;
    use crate::scheduler::TokioScheduler;

    fn gate(limit: u32, window: Duration) -> FloodGate {
        let scheduler = Arc::new(TokioScheduler::current().unwrap());
        FloodGate::with_window(scheduler, limit, window)
    }

    #[tokio::test]
    async fn test_count_increases_by_one_per_call() {
        let gate = gate(100, Duration::from_secs(60));

        for expected in 1..=10 {
            gate.record_activity("guild-1");
            assert_eq!(gate.count("guild-1"), expected);
        }
    }

    #[tokio::test]
    async fn test_trips_at_limit_not_before() {
        let gate = gate(3, Duration::from_secs(60));

        assert!(!gate.record_activity("guild-1"));
        assert!(!gate.record_activity("guild-1"));
        assert!(gate.record_activity("guild-1"));
        // Stays tripped while the window is alive
        assert!(gate.record_activity("guild-1"));
        assert_eq!(gate.count("guild-1"), 4);
    }

    #[tokio::test]
    async fn test_limit_of_one_trips_immediately() {
        let gate = gate(1, Duration::from_secs(60));
        assert!(gate.record_activity("user-1"));
    }

    #[tokio::test]
    async fn test_separate_scopes_do_not_share_counters() {
        let gate = gate(2, Duration::from_secs(60));

        assert!(!gate.record_activity("guild-a"));
        assert!(gate.record_activity("guild-a"));

        assert!(!gate.record_activity("guild-b"));
        assert_eq!(gate.count("guild-a"), 2);
        assert_eq!(gate.count("guild-b"), 1);
    }

    #[tokio::test]
    async fn test_window_resets_after_idle_period() {
        let gate = gate(2, Duration::from_millis(40));

        assert!(!gate.record_activity("guild-1"));
        assert!(gate.record_activity("guild-1"));

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(gate.count("guild-1"), 0);
        assert!(!gate.record_activity("guild-1"));
        assert_eq!(gate.count("guild-1"), 1);
    }

    #[tokio::test]
    async fn test_activity_extends_window() {
        let gate = gate(100, Duration::from_millis(200));

        for _ in 0..5 {
            gate.record_activity("guild-1");
            tokio::time::sleep(Duration::from_millis(60)).await;
        }

        // 300ms have passed, but never 200ms without activity
        assert_eq!(gate.count("guild-1"), 5);
    }

    #[tokio::test]
    async fn test_only_one_timer_per_scope() {
        let gate = gate(100, Duration::from_secs(60));

        gate.record_activity("guild-1");
        gate.record_activity("guild-1");

        assert!(gate.registry().get_or_create("guild-1").has_timer());
        assert_eq!(gate.registry().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_activity_counts_every_event() {
        let gate = Arc::new(gate(10_000, Duration::from_secs(60)));
        assert_eq!(gate.registry().window(), Duration::from_secs(60));

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move {
                    gate.record_activity("guild-1");
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(gate.count("guild-1"), 200);
        assert_eq!(gate.registry().len(), 1);
    }

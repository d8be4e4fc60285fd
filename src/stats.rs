use lazy_static::lazy_static;
use metrics::{counter, gauge, Counter, Gauge};
use std::sync::atomic::{AtomicI64, Ordering};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub validator_creations: Counter,
    pub validator_deletions: Counter,

    // Count of live validators. The actual count is calculated with an atomic
    // since some metrics exporters don't supporting incrementing gauges (e.g. statsd)
    total_validators_count: AtomicI64,
    total_validators: Gauge,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            validator_creations: counter!("document_validator.creations"),
            validator_deletions: counter!("document_validator.deletions"),
            total_validators_count: AtomicI64::new(0),
            total_validators: gauge!("document_validator.total_count"),
        }
    }

    pub fn increment_total_validators(&self) {
        self.update_total_validators(1);
    }

    pub fn decrement_total_validators(&self) {
        self.update_total_validators(-1);
    }

    fn update_total_validators(&self, delta: i64) {
        let prev_value = self.total_validators_count.fetch_add(delta, Ordering::SeqCst);
        self.total_validators.set((prev_value + delta) as f64);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

#[cfg(test)]
mod test {
    use super::Stats;
    use metrics::Key;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::{CompositeKey, MetricKind};

    #[test]
    fn should_track_live_validators() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let stats = Stats::new();
            for _ in 0..3 {
                stats.validator_creations.increment(1);
                stats.increment_total_validators();
            }
            stats.validator_deletions.increment(1);
            stats.decrement_total_validators();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let metric_value = snapshot
            .get(&CompositeKey::new(
                MetricKind::Counter,
                Key::from_name("document_validator.creations"),
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(3)));

        let metric_value = snapshot
            .get(&CompositeKey::new(
                MetricKind::Counter,
                Key::from_name("document_validator.deletions"),
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let metric_value = snapshot
            .get(&CompositeKey::new(
                MetricKind::Gauge,
                Key::from_name("document_validator.total_count"),
            ))
            .expect("metric not found");
        match &metric_value.2 {
            DebugValue::Gauge(value) => assert_eq!(value.0, 2.0),
            _ => panic!("total_count should be a gauge"),
        }
    }
}

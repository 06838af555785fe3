/// Creates a [`BitSet`](crate::BitSet) containing the given elements.
///
/// Negative elements are ignored, exactly as with
/// [`BitSet::from_elems`](crate::BitSet::from_elems).
///
/// # Examples
///
/// ```
/// use dense_bitset::bitset;
///
/// let set = bitset![0, 1, 2, 4, 5];
/// assert_eq!(set.to_string(), "{0..2 4 5}");
///
/// let empty = bitset![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bitset {
    () => {
        $crate::BitSet::new()
    };
    ($($n:expr),+ $(,)?) => {
        $crate::BitSet::from_elems(&[$($n),+])
    };
}

/// Emits a storage trace event when the `tracing` feature is enabled.
macro_rules! trace_storage {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "dense_bitset::storage", $($arg)*);
    };
}

pub(crate) use trace_storage;

#[cfg(all(test, feature = "tracing", feature = "std"))]
mod tests {
    use alloc::{format, string::String, sync::Arc, vec::Vec};
    use core::fmt::{self, Write};
    use std::sync::Mutex;

    use tracing::{
        Event, Metadata, Subscriber,
        field::{Field, Visit},
        span,
    };

    use crate::BitSet;

    /// Subscriber that keeps every event as `target: field=value ...`.
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    struct Fields(String);

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            let _ = write!(self.0, " {}={:?}", field.name(), value);
        }
    }

    impl Subscriber for Recorder {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut fields = Fields(format!("{}:", event.metadata().target()));
            event.record(&mut fields);
            self.events.lock().unwrap().push(fields.0);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    fn record(f: impl FnOnce()) -> Vec<String> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorder = Recorder {
            events: Arc::clone(&events),
        };
        tracing::subscriber::with_default(recorder, f);
        let events = events.lock().unwrap();
        events.clone()
    }

    #[test]
    fn test_growth_emits_trace_event() {
        let events = record(|| {
            let mut set = BitSet::with_capacity(1);
            set.add(0);
            set.add(64 * 4);
        });

        let growth: Vec<&String> = events
            .iter()
            .filter(|e| e.contains("growing bitset storage"))
            .collect();
        assert_eq!(growth.len(), 1, "{events:?}");
        assert!(growth[0].starts_with("dense_bitset::storage:"), "{events:?}");
        assert!(growth[0].contains(" words=5"), "{events:?}");
    }

    #[test]
    fn test_no_event_within_capacity() {
        let events = record(|| {
            let mut set = BitSet::with_capacity(4);
            set.add_range(0, 4 * 64);
            set.reset();
            set.add(100);
        });
        assert!(events.is_empty(), "{events:?}");
    }

    #[test]
    fn test_shrink_emits_trace_event() {
        let mut set = BitSet::new();
        set.add(64 * 40);
        set.reset();
        let events = record(|| set.shrink_to_fit());
        assert_eq!(events.len(), 1, "{events:?}");
        assert!(events[0].contains("shrunk bitset storage"), "{events:?}");
        assert!(events[0].contains(" new_capacity=0"), "{events:?}");
    }
}

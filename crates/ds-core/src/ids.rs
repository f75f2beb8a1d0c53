//! Production `IdSource` backed by the wall clock and UUID v7.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use crate::traits::IdSource;

/// Millisecond-clock record ids with an atomic bump past the last value
/// handed out, so two submissions in the same millisecond never collide.
/// String tokens are UUID v7 for time-ordered uniqueness.
#[derive(Debug, Default)]
pub struct SystemIds {
    last: AtomicI64,
}

impl SystemIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SystemIds {
    fn next_record_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }

    fn next_token(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn record_ids_are_strictly_increasing() {
        let ids = SystemIds::new();
        let batch: Vec<i64> = (0..1000).map(|_| ids.next_record_id()).collect();
        assert!(batch.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tokens_are_unique() {
        let ids = SystemIds::new();
        let tokens: HashSet<String> = (0..1000).map(|_| ids.next_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}

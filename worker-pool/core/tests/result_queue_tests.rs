// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::thread;
use worker_pool_core::{ResultQueue, ResultRecord, WorkerId};

#[test]
fn test_drain_takes_everything_then_stays_empty() {
    let queue = ResultQueue::new();
    queue.put(ResultRecord::new(WorkerId::new(1), 10));
    queue.put(ResultRecord::new(WorkerId::new(2), 20));

    let drained = queue.drain();
    assert_eq!(drained.len(), 2);
    assert!(queue.is_empty());

    assert!(queue.drain().is_empty(), "Second drain yields nothing");
    assert_eq!(queue.try_take(), None);
}

#[test]
fn test_record_keeps_producer_identity() {
    let record = ResultRecord::new(WorkerId::new(3), "done");
    assert_eq!(record.worker(), WorkerId::new(3));
    assert_eq!(record.worker().to_string(), "Worker-3");
    assert_eq!(*record.output(), "done");
    assert_eq!(record.into_output(), "done");
}

#[test]
fn test_concurrent_puts_are_not_lost() {
    let queue = Arc::new(ResultQueue::new());

    let producers: Vec<_> = (1..=4)
        .map(|id| {
            let queue = queue.clone();
            thread::spawn(move || {
                for i in 0..1_000 {
                    queue.put(ResultRecord::new(WorkerId::new(id), i));
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    let drained = queue.drain();
    assert_eq!(drained.len(), 4_000);
    for id in 1..=4 {
        let from_worker = drained
            .iter()
            .filter(|record| record.worker() == WorkerId::new(id))
            .count();
        assert_eq!(from_worker, 1_000);
    }
}

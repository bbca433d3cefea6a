// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use worker_pool_core::{PushError, Take, WorkQueue};

#[test]
fn test_take_follows_submission_order() {
    let queue = WorkQueue::new();
    for i in 0..3 {
        queue.push(i).unwrap();
    }

    assert_eq!(queue.try_take(), Take::Item(0));
    assert_eq!(queue.try_take(), Take::Item(1));
    assert_eq!(queue.try_take(), Take::Item(2));
    assert_eq!(queue.try_take(), Take::Empty);
}

#[test]
fn test_empty_queue_reports_empty_without_blocking() {
    let queue: WorkQueue<u32> = WorkQueue::new();
    assert_eq!(queue.try_take(), Take::Empty);
    assert_eq!(queue.try_take(), Take::Empty, "Empty is stable");
    assert!(queue.is_empty());
}

#[test]
fn test_closed_queue_stops_hand_out_but_keeps_items() {
    let queue = WorkQueue::new();
    queue.push("a").unwrap();
    queue.push("b").unwrap();
    queue.close();

    assert_eq!(queue.try_take(), Take::Closed);
    assert!(queue.is_closed());
    assert_eq!(queue.len(), 2, "Stranded items remain countable");
}

#[test]
fn test_push_after_close_returns_item() {
    let queue = WorkQueue::new();
    queue.close();

    let err = queue.push(7).unwrap_err();
    assert_eq!(err, PushError::Closed(7));
    assert_eq!(err.into_inner(), 7);
}

#[test]
fn test_bounded_queue_rejects_when_full() {
    let queue = WorkQueue::with_capacity(2);
    assert_eq!(queue.capacity(), Some(2));
    queue.push(1).unwrap();
    queue.push(2).unwrap();

    assert_eq!(queue.push(3), Err(PushError::Full(3)));

    assert_eq!(queue.try_take(), Take::Item(1));
    queue.push(3).unwrap();
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_concurrent_takers_receive_each_item_once() {
    let queue = Arc::new(WorkQueue::new());
    for i in 0..10_000 {
        queue.push(i).unwrap();
    }

    let takers: Vec<_> = (0..8)
        .map(|_| {
            let queue = queue.clone();
            thread::spawn(move || {
                let mut taken = Vec::new();
                while let Take::Item(item) = queue.try_take() {
                    taken.push(item);
                }
                taken
            })
        })
        .collect();

    let mut seen = HashSet::new();
    let mut total = 0;
    for taker in takers {
        for item in taker.join().unwrap() {
            total += 1;
            assert!(seen.insert(item), "Item {} handed out twice", item);
        }
    }

    assert_eq!(total, 10_000);
    assert!(queue.is_empty());
}

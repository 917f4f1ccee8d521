// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Independent runs share an executor but nothing else.

use std::time::Duration;

use super::{captured, executor};

#[tokio::test]
async fn concurrent_runs_capture_their_own_output() {
    let (exec, _console) = executor();
    let options = captured();

    let (left, right) = tokio::join!(
        exec.run("sh -c 'for i in 1 2 3; do echo left$i; done'", &options),
        exec.run("sh -c 'for i in 1 2 3; do echo right$i; done'", &options),
    );

    assert_eq!(left.unwrap().output, "left1\nleft2\nleft3\n");
    assert_eq!(right.unwrap().output, "right1\nright2\nright3\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_runs_on_cloned_executors() {
    let (exec, _console) = executor();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let exec = exec.clone();
            tokio::spawn(async move {
                let result = exec
                    .run(vec!["echo".to_string(), format!("run-{i}")], &captured())
                    .await
                    .unwrap();
                (i, result.output)
            })
        })
        .collect();

    for handle in handles {
        let (i, output) = handle.await.unwrap();
        assert_eq!(output, format!("run-{i}\n"));
    }
}

#[tokio::test]
async fn caller_timeout_abandons_the_run() {
    let (exec, _console) = executor();
    let options = captured();
    let started = std::time::Instant::now();

    let outcome = tokio::time::timeout(Duration::from_millis(200), exec.run("sleep 5", &options)).await;

    assert!(outcome.is_err(), "sleep should not finish within the timeout");
    assert!(started.elapsed() < Duration::from_secs(4));
}

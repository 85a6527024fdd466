use super::*;
use crate::kernel::assistant::AssistantError;
use std::sync::mpsc;
use std::time::{Duration, Instant};

#[test]
fn assistant_reply_arrives_after_its_delay() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();

    let start = Instant::now();
    runtime.run_effect(Effect::ScheduleAssistantReply(PendingReply {
        request_id: 3,
        delay: Duration::from_millis(30),
        outcome: Ok("done".to_string()),
    }));

    let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(30));
    let AppMessage::AssistantReply {
        request_id,
        outcome,
    } = msg;
    assert_eq!(request_id, 3);
    assert_eq!(outcome, Ok("done".to_string()));
}

#[test]
fn replies_are_delivered_in_delay_order() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();

    runtime.schedule_assistant_reply(PendingReply {
        request_id: 1,
        delay: Duration::from_millis(120),
        outcome: Err(AssistantError::SimulatedFailure),
    });
    runtime.schedule_assistant_reply(PendingReply {
        request_id: 2,
        delay: Duration::from_millis(5),
        outcome: Ok("fast".to_string()),
    });

    let ids: Vec<u64> = (0..2)
        .map(|_| match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppMessage::AssistantReply { request_id, .. } => request_id,
        })
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn dropped_receiver_does_not_panic_the_task() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    drop(rx);

    runtime.schedule_assistant_reply(PendingReply {
        request_id: 1,
        delay: Duration::from_millis(1),
        outcome: Ok(String::new()),
    });
    std::thread::sleep(Duration::from_millis(50));
}

#[test]
fn current_thread_fallback_still_delivers_replies() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::current_thread(tx).unwrap();

    runtime.schedule_assistant_reply(PendingReply {
        request_id: 7,
        delay: Duration::from_millis(10),
        outcome: Ok("fallback".to_string()),
    });

    let AppMessage::AssistantReply {
        request_id,
        outcome,
    } = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(request_id, 7);
    assert_eq!(outcome, Ok("fallback".to_string()));
}

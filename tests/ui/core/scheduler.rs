use crate::support::{branches, FakeVcs};
use git_pick::ui::core::{Command, CommandId, ComponentId, Message, Payload, Scheduler};
use git_pick::vcs::{Branch, VcsError};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, timeout};

async fn next(rx: &mut UnboundedReceiver<Message>) -> Message {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("channel closed")
}

#[tokio::test]
async fn test_list_branches_reports_with_request_id() {
    let (mut scheduler, mut rx) = Scheduler::new(Arc::new(FakeVcs::with_branches(&["main", "dev"])));
    let id = CommandId::next();
    scheduler.schedule(Command::ListBranches { id });

    assert_eq!(
        next(&mut rx).await,
        Message::AsyncResult {
            id,
            outcome: Ok(Payload::Branches(branches(&["main", "dev"]))),
        }
    );
}

#[tokio::test]
async fn test_checkout_reports_the_branch() {
    let vcs = Arc::new(FakeVcs::with_branches(&["main"]));
    let (mut scheduler, mut rx) = Scheduler::new(vcs.clone());
    let id = CommandId::next();
    scheduler.schedule(Command::Checkout {
        id,
        branch: Branch::local("main"),
    });

    assert_eq!(
        next(&mut rx).await,
        Message::AsyncResult {
            id,
            outcome: Ok(Payload::CheckedOut(Branch::local("main"))),
        }
    );
    assert_eq!(vcs.checkouts(), vec!["main".to_string()]);
}

#[tokio::test]
async fn test_batch_delivers_one_message_per_leaf() {
    let (mut scheduler, mut rx) = Scheduler::new(Arc::new(FakeVcs::with_branches(&["main"])));
    let first = CommandId::next();
    let second = CommandId::next();
    scheduler.schedule(Command::batch([
        Command::ListBranches { id: first },
        Command::ListBranches { id: second },
        Command::Emit(Message::Activated),
    ]));

    let mut ids = Vec::new();
    let mut activated = 0;
    for _ in 0..3 {
        match next(&mut rx).await {
            Message::AsyncResult { id, .. } => ids.push(id),
            Message::Activated => activated += 1,
            other => panic!("unexpected message {:?}", other),
        }
    }
    ids.sort();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(activated, 1);
}

#[tokio::test]
async fn test_backend_panic_becomes_error_result() {
    let (mut scheduler, mut rx) = Scheduler::new(Arc::new(FakeVcs::panicking()));
    let id = CommandId::next();
    scheduler.schedule(Command::ListBranches { id });

    match next(&mut rx).await {
        Message::AsyncResult {
            id: got,
            outcome: Err(VcsError::Backend(_)),
        } => assert_eq!(got, id),
        other => panic!("expected a backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_frame_carries_id_and_tag() {
    let (mut scheduler, mut rx) = Scheduler::new(Arc::new(FakeVcs::with_branches(&[])));
    let id = ComponentId::next();
    scheduler.schedule(Command::Frame {
        id,
        tag: 7,
        after: Duration::from_millis(5),
    });

    assert_eq!(next(&mut rx).await, Message::AnimationFrame { id, tag: 7 });
}

#[tokio::test]
async fn test_cancel_all_tasks_discards_pending_work() {
    let (mut scheduler, mut rx) = Scheduler::new(Arc::new(FakeVcs::with_branches(&[])));
    scheduler.schedule(Command::tick(Duration::from_secs(60)));
    assert_eq!(scheduler.task_count(), 1);

    scheduler.cancel_all_tasks();
    assert_eq!(scheduler.task_count(), 0);
    assert!(timeout(Duration::from_millis(50), rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_cancel_all_tasks_drops_running_backend_call() {
    let vcs = Arc::new(FakeVcs::with_branches(&["main"]).hanging_checkout());
    let (mut scheduler, _rx) = Scheduler::new(vcs.clone());
    scheduler.schedule(Command::Checkout {
        id: CommandId::next(),
        branch: Branch::local("main"),
    });
    timeout(Duration::from_secs(2), vcs.checkout_started.notified())
        .await
        .expect("checkout never started");

    scheduler.cancel_all_tasks();

    let dropped = timeout(Duration::from_secs(2), async {
        while !vcs.checkout_dropped.load(Ordering::SeqCst) {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(dropped.is_ok(), "backend call kept running after cancel");
}

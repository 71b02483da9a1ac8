use std::sync::{mpsc, Arc};
use std::time::Duration;

use pretty_assertions::assert_eq;
use resumo_core::{Toast, ToastKind};
use resumo_engine::{ChannelToastSink, DismissReason, ToastCenter, ToastEvent};
use tokio::runtime::Handle;

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

fn messages(center: &ToastCenter) -> Vec<String> {
    center
        .visible()
        .into_iter()
        .map(|active| active.toast.message)
        .collect()
}

#[tokio::test(start_paused = true)]
async fn toast_expires_after_its_duration_and_not_before() {
    let center = ToastCenter::new(Handle::current());
    center.notify(Toast::info("Saved").with_duration(1000));
    settle().await;

    tokio::time::sleep(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(messages(&center), vec!["Saved"]);

    tokio::time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert!(center.visible().is_empty());
}

#[tokio::test(start_paused = true)]
async fn default_duration_is_five_seconds() {
    let center = ToastCenter::new(Handle::current());
    center.success("Uploaded");
    settle().await;

    tokio::time::sleep(Duration::from_millis(4990)).await;
    settle().await;
    assert_eq!(center.visible().len(), 1);

    tokio::time::sleep(Duration::from_millis(20)).await;
    settle().await;
    assert!(center.visible().is_empty());
}

#[tokio::test(start_paused = true)]
async fn toasts_stack_in_creation_order_and_expire_independently() {
    let center = ToastCenter::new(Handle::current());
    center.notify_with("first", ToastKind::Info, 3000);
    center.notify_with("second", ToastKind::Warning, 1000);
    center.notify_with("third", ToastKind::Error, 2000);
    settle().await;
    assert_eq!(messages(&center), vec!["first", "second", "third"]);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    settle().await;
    assert_eq!(messages(&center), vec!["first", "third"]);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    settle().await;
    assert_eq!(messages(&center), vec!["first"]);
}

#[tokio::test(start_paused = true)]
async fn early_dismissal_cancels_the_timer() {
    let (tx, rx) = mpsc::channel();
    let center = ToastCenter::with_sink(Handle::current(), Arc::new(ChannelToastSink::new(tx)));
    let id = center.warning("Check your input");
    settle().await;

    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
    assert!(center.visible().is_empty());

    tokio::time::sleep(Duration::from_millis(6000)).await;
    settle().await;

    let events = rx.try_iter().collect::<Vec<_>>();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], ToastEvent::Shown(ref active) if active.id == id));
    assert_eq!(
        events[1],
        ToastEvent::Dismissed {
            id,
            reason: DismissReason::User
        }
    );
}

#[tokio::test(start_paused = true)]
async fn expiry_is_reported_to_sink() {
    let (tx, rx) = mpsc::channel();
    let center = ToastCenter::with_sink(Handle::current(), Arc::new(ChannelToastSink::new(tx)));
    let id = center.error("Upload failed");
    settle().await;

    tokio::time::sleep(Duration::from_millis(5001)).await;
    settle().await;

    let events = rx.try_iter().collect::<Vec<_>>();
    assert_eq!(
        events.last(),
        Some(&ToastEvent::Dismissed {
            id,
            reason: DismissReason::Expired
        })
    );
}

#[tokio::test]
async fn convenience_wrappers_bind_kinds() {
    let center = ToastCenter::new(Handle::current());
    center.info("a");
    center.success("b");
    center.warning("c");
    center.error("d");

    let kinds = center
        .visible()
        .into_iter()
        .map(|active| active.toast.kind)
        .collect::<Vec<_>>();
    assert_eq!(kinds, ToastKind::ALL.to_vec());
}

#[tokio::test]
async fn ids_are_unique_and_increasing() {
    let center = ToastCenter::new(Handle::current());
    let a = center.info("a");
    let b = center.info("b");
    assert!(b > a);
    assert_eq!(center.visible().len(), 2);
    assert!(!center.dismiss(b + 100));
}

//! Integration test: command ingress and concurrent reads.
//!
//! Covers the batch receipt contract (one receipt per command, in
//! order), removal receipts, tag indexing through the command path, and
//! readers querying the shared space from other threads while the tick
//! thread is running.

use std::time::Duration;

use drift_core::Position;
use drift_engine::{CommandReceipt, EngineConfig, SpaceCommand, TickThread};
use drift_space::Tag;
use drift_test_utils::{AnchorBody, CountingBody};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn recv(
    rx: crossbeam_channel::Receiver<Vec<CommandReceipt>>,
) -> Vec<CommandReceipt> {
    rx.recv_timeout(Duration::from_secs(2)).unwrap()
}

#[test]
fn receipts_arrive_in_command_order() {
    init_logging();
    let thread = TickThread::spawn(EngineConfig::default()).unwrap();
    let here = Position::new(1.0, 2.0, 3.0);

    let receipts = recv(
        thread
            .submit(vec![
                SpaceCommand::Insert {
                    pos: here,
                    body: AnchorBody::boxed(5.0),
                    tags: vec![Tag::from("tile")],
                },
                SpaceCommand::Insert {
                    pos: here,
                    body: AnchorBody::boxed(7.0),
                    tags: Vec::new(),
                },
                SpaceCommand::Remove {
                    pos: here,
                    filter: Vec::new(),
                },
            ])
            .unwrap(),
    );

    assert_eq!(receipts.len(), 3);
    assert!(matches!(receipts[0], CommandReceipt::Inserted(_)));
    assert!(matches!(receipts[1], CommandReceipt::Inserted(_)));
    assert_eq!(receipts[2], CommandReceipt::Removed(2));
    assert!(thread.shared().is_empty());
    assert!(thread.shared().read().tagged(&Tag::from("tile")).is_empty());

    thread.shutdown();
}

#[test]
fn filtered_removal_leaves_the_rest() {
    init_logging();
    let thread = TickThread::spawn(EngineConfig::default()).unwrap();
    let here = Position::origin();

    let receipts = recv(
        thread
            .submit(vec![
                SpaceCommand::Insert {
                    pos: here,
                    body: AnchorBody::boxed(1.0),
                    tags: Vec::new(),
                },
                SpaceCommand::Insert {
                    pos: here,
                    body: AnchorBody::boxed(2.0),
                    tags: Vec::new(),
                },
            ])
            .unwrap(),
    );
    let first = match receipts[0] {
        CommandReceipt::Inserted(id) => id,
        other => panic!("expected an insert receipt, got {other:?}"),
    };

    let receipts = recv(
        thread
            .submit(vec![SpaceCommand::Remove {
                pos: here,
                filter: vec![first],
            }])
            .unwrap(),
    );
    assert_eq!(receipts, vec![CommandReceipt::Removed(1)]);
    assert_eq!(thread.shared().len(), 1);

    thread.shutdown();
}

#[test]
fn readers_see_inserts_while_ticking() {
    init_logging();
    let thread = TickThread::spawn(EngineConfig::default()).unwrap();

    for step in 0..8 {
        let receipts = recv(
            thread
                .submit(vec![SpaceCommand::Insert {
                    pos: Position::new(f64::from(step), 0.0, 0.0),
                    body: CountingBody::boxed(0.0),
                    tags: Vec::new(),
                }])
                .unwrap(),
        );
        assert_eq!(receipts.len(), 1);
    }

    let shared = thread.shared().clone();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.len())
        })
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), 8);
    }

    thread.shutdown();
}

#[test]
fn removal_at_an_empty_position_counts_nothing() {
    init_logging();
    let thread = TickThread::spawn(EngineConfig::default()).unwrap();

    let receipts = recv(
        thread
            .submit(vec![SpaceCommand::Remove {
                pos: Position::new(9.0, 9.0, 9.0),
                filter: Vec::new(),
            }])
            .unwrap(),
    );
    assert_eq!(receipts, vec![CommandReceipt::Removed(0)]);

    thread.shutdown();
}

#[test]
fn shared_space_outlives_the_thread() {
    init_logging();
    let thread = TickThread::spawn(EngineConfig::default()).unwrap();
    let receipts = recv(
        thread
            .submit(vec![SpaceCommand::Insert {
                pos: Position::origin(),
                body: AnchorBody::boxed(1.0),
                tags: Vec::new(),
            }])
            .unwrap(),
    );
    assert_eq!(receipts.len(), 1);

    let shared = thread.shared().clone();
    thread.shutdown();

    // Shutdown stops the ticking but the space itself survives in any
    // remaining clones.
    assert_eq!(shared.len(), 1);
}

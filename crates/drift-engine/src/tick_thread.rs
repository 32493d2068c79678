//! A dedicated thread that owns the tick loop and applies queued
//! commands between ticks.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use drift_core::{Body, ObjectId, Position};
use drift_space::{SharedSpace, Space, Tag};

use crate::config::{ConfigError, EngineConfig};
use crate::pacing::TickLoop;

/// A mutation for the tick thread to apply between ticks.
pub enum SpaceCommand {
    /// Insert a body at a position with the given tags.
    Insert {
        /// Where the body lands.
        pos: Position,
        /// The body itself.
        body: Box<dyn Body>,
        /// Tags to index it under.
        tags: Vec<Tag>,
    },
    /// Remove objects at a position, optionally restricted to the
    /// listed IDs.
    Remove {
        /// The position to clear.
        pos: Position,
        /// Restricts removal when non-empty.
        filter: Vec<ObjectId>,
    },
}

impl fmt::Debug for SpaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { pos, tags, .. } => f
                .debug_struct("Insert")
                .field("pos", pos)
                .field("tags", tags)
                .finish_non_exhaustive(),
            Self::Remove { pos, filter } => f
                .debug_struct("Remove")
                .field("pos", pos)
                .field("filter", filter)
                .finish(),
        }
    }
}

/// What one applied command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandReceipt {
    /// An insert happened; here is the new ID.
    Inserted(ObjectId),
    /// A removal happened; this many objects came out.
    Removed(usize),
}

/// Why a submission was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The ingress queue is at capacity; retry after a tick.
    ChannelFull,
    /// The tick thread has shut down and will never accept again.
    Shutdown,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelFull => write!(f, "ingress queue is full"),
            Self::Shutdown => write!(f, "tick thread has shut down"),
        }
    }
}

impl Error for SubmitError {}

struct Batch {
    commands: Vec<SpaceCommand>,
    reply: Sender<Vec<CommandReceipt>>,
}

/// Handle to a space ticked on its own thread.
///
/// All writes flow through [`TickThread::submit`]; reads go straight
/// to the shared space. Dropping the handle stops and joins the
/// thread.
pub struct TickThread {
    shared: SharedSpace,
    tx: Sender<Batch>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickThread {
    /// Start a fresh space ticking under the given configuration.
    pub fn spawn(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let shared = SharedSpace::new(Space::new(config.gravity_params()));
        let ticker = TickLoop::new(shared.clone(), &config)?;
        let (tx, rx) = bounded(config.ingress_capacity);
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || run(ticker, rx, thread_stop));
        Ok(Self {
            shared,
            tx,
            stop,
            handle: Some(handle),
        })
    }

    /// The space being ticked, for direct queries.
    pub fn shared(&self) -> &SharedSpace {
        &self.shared
    }

    /// Queue a batch of commands.
    ///
    /// The batch is applied atomically before some upcoming tick; the
    /// returned channel yields one receipt per command, in order.
    pub fn submit(
        &self,
        commands: Vec<SpaceCommand>,
    ) -> Result<Receiver<Vec<CommandReceipt>>, SubmitError> {
        if self.stop.load(Ordering::Acquire) {
            return Err(SubmitError::Shutdown);
        }
        let (reply_tx, reply_rx) = bounded(1);
        self.tx
            .try_send(Batch {
                commands,
                reply: reply_tx,
            })
            .map_err(|err| match err {
                TrySendError::Full(_) => SubmitError::ChannelFull,
                TrySendError::Disconnected(_) => SubmitError::Shutdown,
            })?;
        Ok(reply_rx)
    }

    /// Stop ticking and join the thread.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickThread {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn run(mut ticker: TickLoop, rx: Receiver<Batch>, stop: Arc<AtomicBool>) {
    // Commands applied while the pacing slot is closed carry over into
    // the next tick's metrics.
    let mut pending = 0usize;
    while !stop.load(Ordering::Acquire) {
        while let Ok(batch) = rx.try_recv() {
            let receipts = apply(ticker.shared(), batch.commands);
            pending += receipts.len();
            let _ = batch.reply.send(receipts);
        }
        match ticker.try_tick(pending) {
            Some(_) => pending = 0,
            None => {
                let wait = ticker.until_next_slot().min(Duration::from_millis(1));
                thread::sleep(wait);
            }
        }
    }
}

fn apply(shared: &SharedSpace, commands: Vec<SpaceCommand>) -> Vec<CommandReceipt> {
    let mut space = shared.write();
    commands
        .into_iter()
        .map(|command| match command {
            SpaceCommand::Insert { pos, body, tags } => {
                CommandReceipt::Inserted(space.insert_at(pos, body, tags))
            }
            SpaceCommand::Remove { pos, filter } => {
                CommandReceipt::Removed(space.remove_at(pos, &filter).len())
            }
        })
        .collect()
}

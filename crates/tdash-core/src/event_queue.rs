#![forbid(unsafe_code)]

//! Cancellable event queue between an input source and the host loop.
//!
//! A terminal backend (or a test) pushes [`Event`]s through an
//! [`EventSender`]; the host blocks on [`EventReceiver::recv`]. Calling
//! [`EventSender::shutdown`], or dropping every sender, closes the queue:
//! the receiver drains anything queued before the shutdown and then
//! returns `None`, which unblocks a waiting host.
//!
//! ```
//! use tdash_core::event::Event;
//! use tdash_core::event_queue::EventQueue;
//!
//! let (tx, rx) = EventQueue::new();
//! tx.send(Event::char('q')).unwrap();
//! tx.shutdown();
//! assert_eq!(rx.recv(), Some(Event::char('q')));
//! assert_eq!(rx.recv(), None);
//! ```

use std::cell::Cell;
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use crate::error::Error;
use crate::event::Event;

enum Message {
    Event(Event),
    Shutdown,
}

/// Constructor namespace for the sender/receiver pair.
pub struct EventQueue;

impl EventQueue {
    /// Create a connected sender/receiver pair.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (EventSender, EventReceiver) {
        let (tx, rx) = mpsc::channel();
        let closed = Arc::new(RwLock::new(false));
        (
            EventSender {
                tx,
                closed: Arc::clone(&closed),
            },
            EventReceiver {
                rx,
                closed,
                done: Cell::new(false),
            },
        )
    }
}

/// Producer half. Cheap to clone and `Send`.
///
/// Senders hold the shared read lock across the closed check and the
/// enqueue; shutdown takes the write lock, so every successful send is
/// queued ahead of the shutdown marker.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<Message>,
    closed: Arc<RwLock<bool>>,
}

impl EventSender {
    /// Queue an event for the host.
    ///
    /// Fails with [`Error::QueueClosed`] after shutdown or once the
    /// receiver is gone. An `Ok` return means the receiver will see the
    /// event before it sees the queue close.
    pub fn send(&self, event: Event) -> Result<(), Error> {
        let closed = self.closed.read().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            return Err(Error::QueueClosed);
        }
        self.tx
            .send(Message::Event(event))
            .map_err(|_| Error::QueueClosed)
    }

    /// Close the queue and wake the receiver.
    ///
    /// Idempotent; events queued before the call are still delivered.
    pub fn shutdown(&self) {
        let mut closed = self.closed.write().unwrap_or_else(PoisonError::into_inner);
        if !*closed {
            *closed = true;
            crate::debug!("event queue shutdown requested");
            let _ = self.tx.send(Message::Shutdown);
        }
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_closed(&self) -> bool {
        *self.closed.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Consumer half, owned by the host's dispatch loop.
pub struct EventReceiver {
    rx: mpsc::Receiver<Message>,
    closed: Arc<RwLock<bool>>,
    done: Cell<bool>,
}

impl EventReceiver {
    /// Block until the next event; `None` once the queue is closed.
    pub fn recv(&self) -> Option<Event> {
        if self.done.get() {
            return None;
        }
        match self.rx.recv() {
            Ok(Message::Event(event)) => Some(event),
            Ok(Message::Shutdown) | Err(_) => self.finish(),
        }
    }

    /// Like [`recv`](Self::recv) but gives up after `timeout`.
    ///
    /// Returns `Ok(None)` on timeout and `Err(QueueClosed)` once closed.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<Event>, Error> {
        if self.done.get() {
            return Err(Error::QueueClosed);
        }
        match self.rx.recv_timeout(timeout) {
            Ok(Message::Event(event)) => Ok(Some(event)),
            Ok(Message::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                self.finish();
                Err(Error::QueueClosed)
            }
            Err(RecvTimeoutError::Timeout) => Ok(None),
        }
    }

    /// Non-blocking poll. `Ok(None)` when nothing is queued.
    pub fn try_recv(&self) -> Result<Option<Event>, Error> {
        if self.done.get() {
            return Err(Error::QueueClosed);
        }
        match self.rx.try_recv() {
            Ok(Message::Event(event)) => Ok(Some(event)),
            Ok(Message::Shutdown) | Err(TryRecvError::Disconnected) => {
                self.finish();
                Err(Error::QueueClosed)
            }
            Err(TryRecvError::Empty) => Ok(None),
        }
    }

    fn finish(&self) -> Option<Event> {
        self.done.set(true);
        *self.closed.write().unwrap_or_else(PoisonError::into_inner) = true;
        None
    }
}

impl Iterator for &EventReceiver {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.recv()
    }
}

//! Sport selection shared between the rules section and the registration form.

use tokio::sync::watch;

use crate::Sport;

/// Holds the sport picked outside the form (e.g. while reading the rules).
///
/// The form subscribes at construction and only ever reads from it.
#[derive(Debug)]
pub struct SelectionContext {
    tx: watch::Sender<Option<Sport>>,
}

impl SelectionContext {
    pub fn new(initial: Option<Sport>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn select(&self, sport: Sport) {
        self.tx.send_replace(Some(sport));
    }

    pub fn current(&self) -> Option<Sport> {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Sport>> {
        self.tx.subscribe()
    }
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self::new(None)
    }
}

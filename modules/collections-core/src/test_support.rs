use alloc::vec::Vec;
use std::sync::Mutex;

use crate::{event::ChangeEvent, observer::ChangeNotifier};

/// Notifier that records every event it receives.
pub(crate) struct RecordingNotifier<T> {
  events: Mutex<Vec<ChangeEvent<T>>>,
}

impl<T: Clone> RecordingNotifier<T> {
  pub(crate) fn events(&self) -> Vec<ChangeEvent<T>> {
    self.events.lock().unwrap().clone()
  }
}

impl<T> Default for RecordingNotifier<T> {
  fn default() -> Self {
    Self { events: Mutex::new(Vec::new()) }
  }
}

impl<T: Clone> ChangeNotifier<T> for RecordingNotifier<T> {
  fn notify(&self, event: &ChangeEvent<T>) {
    self.events.lock().unwrap().push(event.clone());
  }
}

// Copyright 2025 Simplecall Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::media_source::MediaSource;

pub type MediaSourceListener = Box<dyn FnMut(MediaSource) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Mapping from listener ids to callbacks, fanned out in registration order.
#[derive(Clone, Default)]
pub struct MediaSourceListenerSet {
    inner: Arc<Mutex<ListenerSetInner>>,
}

#[derive(Default)]
struct ListenerSetInner {
    next_id: u64,
    listeners: Vec<(ListenerId, Arc<Mutex<MediaSourceListener>>)>,
}

impl MediaSourceListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: MediaSourceListener) -> ListenerId {
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(Mutex::new(listener))));
        id
    }

    /// Returns true if the listener was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    /// Fans `source` out to every registered listener, in registration order.
    /// Iterates a snapshot, so a callback may register or remove listeners;
    /// changes take effect from the next notification.
    pub fn notify_listeners(&self, source: &MediaSource) {
        let snapshot: Vec<_> =
            self.inner.lock().listeners.iter().map(|(_, listener)| listener.clone()).collect();
        for listener in snapshot {
            (listener.lock())(source.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{media_source::SourceOrigin, MediaType};

    fn test_source(name: &str) -> MediaSource {
        MediaSource::new(name, MediaType::Video, SourceOrigin::Remote)
    }

    fn collecting_listener() -> (MediaSourceListener, Arc<Mutex<Vec<MediaSource>>>) {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let listener: MediaSourceListener = {
            let sink = sink.clone();
            Box::new(move |source| sink.lock().push(source))
        };
        (listener, sink)
    }

    #[test]
    fn notifies_in_registration_order() {
        let set = MediaSourceListenerSet::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            set.add_listener(Box::new(move |_| order.lock().push(tag)));
        }

        set.notify_listeners(&test_source("camera"));
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn no_replay_for_late_registration() {
        let set = MediaSourceListenerSet::new();
        set.notify_listeners(&test_source("camera"));

        let (listener, sink) = collecting_listener();
        set.add_listener(listener);
        assert!(sink.lock().is_empty());

        let late = test_source("camera");
        set.notify_listeners(&late);
        assert_eq!(*sink.lock(), vec![late]);
    }

    #[test]
    fn removed_listener_is_skipped() {
        let set = MediaSourceListenerSet::new();
        let (first, first_sink) = collecting_listener();
        let (second, second_sink) = collecting_listener();
        let first_id = set.add_listener(first);
        set.add_listener(second);

        assert!(set.remove_listener(first_id));
        assert!(!set.remove_listener(first_id));

        set.notify_listeners(&test_source("camera"));
        assert!(first_sink.lock().is_empty());
        assert_eq!(second_sink.lock().len(), 1);
    }

    #[test]
    fn listener_may_register_during_notification() {
        let set = MediaSourceListenerSet::new();
        let (nested, nested_sink) = collecting_listener();
        let nested = Arc::new(Mutex::new(Some(nested)));
        let registrar = set.clone();
        set.add_listener(Box::new(move |_| {
            if let Some(listener) = nested.lock().take() {
                registrar.add_listener(listener);
            }
        }));

        set.notify_listeners(&test_source("camera"));
        assert!(nested_sink.lock().is_empty());

        set.notify_listeners(&test_source("camera"));
        assert_eq!(nested_sink.lock().len(), 1);
    }
}

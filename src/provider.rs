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

use std::fmt::{Debug, Formatter};

use log::trace;

use crate::{
    listener_set::{ListenerId, MediaSourceListener, MediaSourceListenerSet},
    media_source::MediaSource,
    MediaType,
};

pub trait MediaSourceProvider: Send + Sync {
    /// Registers a listener invoked every time a media source becomes
    /// available. A listener registered after a source was announced does not
    /// see it (no replay).
    fn add_media_source_listener(&self, listener: MediaSourceListener) -> ListenerId;
}

/// Provider for a capture device (microphone or camera). The capture layer
/// pushes a ready source into it with [`provide_source`]; how many instances
/// exist per device is up to the composition root.
///
/// [`provide_source`]: CaptureSourceProvider::provide_source
#[derive(Clone)]
pub struct CaptureSourceProvider {
    name: String,
    media_type: MediaType,
    listeners: MediaSourceListenerSet,
}

impl CaptureSourceProvider {
    pub fn new(name: &str, media_type: MediaType) -> Self {
        Self { name: name.to_owned(), media_type, listeners: MediaSourceListenerSet::new() }
    }

    pub fn microphone() -> Self {
        Self::new("microphone", MediaType::Audio)
    }

    pub fn camera() -> Self {
        Self::new("camera", MediaType::Video)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Called by the capture layer when a device source is ready, or replaced
    /// after a device switch.
    pub fn provide_source(&self, source: MediaSource) {
        trace!("{} source ready: {:?}", self.name, source);
        self.listeners.notify_listeners(&source);
    }
}

impl MediaSourceProvider for CaptureSourceProvider {
    fn add_media_source_listener(&self, listener: MediaSourceListener) -> ListenerId {
        self.listeners.add_listener(listener)
    }
}

impl Debug for CaptureSourceProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSourceProvider")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .finish()
    }
}

/// Adapter exposing remote video sources to consumers such as views. No
/// filtering and no caching of the current source for late joiners.
#[derive(Clone, Default)]
pub struct VideoSourceProvider {
    set: MediaSourceListenerSet,
}

impl VideoSourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify_listeners(&self, source: &MediaSource) {
        self.set.notify_listeners(source);
    }

    pub fn remove_media_source_listener(&self, id: ListenerId) -> bool {
        self.set.remove_listener(id)
    }
}

impl MediaSourceProvider for VideoSourceProvider {
    fn add_media_source_listener(&self, listener: MediaSourceListener) -> ListenerId {
        self.set.add_listener(listener)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::media_source::SourceOrigin;

    #[test]
    fn capture_provider_fans_out_to_all_listeners() {
        let provider = CaptureSourceProvider::microphone();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));
        for sink in [&first, &second] {
            let sink = sink.clone();
            provider.add_media_source_listener(Box::new(move |source| sink.lock().push(source)));
        }

        let source = MediaSource::new("microphone", MediaType::Audio, SourceOrigin::Capture);
        provider.provide_source(source.clone());

        assert_eq!(*first.lock(), vec![source.clone()]);
        assert_eq!(*second.lock(), vec![source]);
    }
}

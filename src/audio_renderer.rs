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

use std::{
    fmt::{Debug, Formatter, Write},
    sync::Arc,
};

use log::debug;
use parking_lot::Mutex;

use crate::media_source::MediaSource;

/// Playback sink for remote audio. Holds at most one active source; setting a
/// new one replaces the prior one.
#[derive(Clone, Default)]
pub struct AudioRenderer {
    inner: Arc<RendererInner>,
}

#[derive(Default)]
struct RendererInner {
    source: Mutex<Option<MediaSource>>,
}

impl AudioRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source(&self, source: MediaSource) {
        let previous = self.inner.source.lock().replace(source.clone());
        match previous {
            Some(previous) => {
                debug!("audio renderer source replaced: {} -> {}", previous.id(), source.id())
            }
            None => debug!("audio renderer source set: {}", source.id()),
        }
    }

    pub fn source(&self) -> Option<MediaSource> {
        self.inner.source.lock().clone()
    }

    /// The renderer pipeline graph in dot format.
    pub fn dot_data(&self) -> String {
        let source = self.inner.source.lock();
        let mut dot = String::from("digraph audio_renderer {\n  rankdir=LR;\n");
        if let Some(source) = source.as_ref() {
            let _ = writeln!(dot, "  \"source_{}\" -> \"renderer_sink\";", source.id());
        }
        dot.push_str("}\n");
        dot
    }
}

impl Debug for AudioRenderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioRenderer").field("source", &self.source()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{media_source::SourceOrigin, MediaType};

    fn remote_audio() -> MediaSource {
        MediaSource::new("remote-audio", MediaType::Audio, SourceOrigin::Remote)
    }

    #[test]
    fn replaces_active_source() {
        let renderer = AudioRenderer::new();
        assert_eq!(renderer.source(), None);

        let first = remote_audio();
        let second = remote_audio();
        renderer.set_source(first);
        renderer.set_source(second.clone());
        assert_eq!(renderer.source(), Some(second));
    }

    #[test]
    fn dot_dump_reflects_active_source() {
        let renderer = AudioRenderer::new();
        let empty = renderer.dot_data();
        assert!(empty.starts_with("digraph audio_renderer {"));
        assert!(!empty.contains("renderer_sink"));

        let source = remote_audio();
        renderer.set_source(source.clone());
        let dot = renderer.dot_data();
        assert!(dot.contains(&source.id()));
        assert!(dot.contains("renderer_sink"));
    }
}

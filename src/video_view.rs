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
    fmt::{Debug, Formatter},
    sync::Arc,
};

use log::trace;
use parking_lot::Mutex;

use crate::{
    listener_set::ListenerId,
    media_source::MediaSource,
    provider::{MediaSourceProvider, VideoSourceProvider},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoRotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl VideoRotation {
    pub fn degrees(&self) -> u32 {
        match self {
            VideoRotation::Deg0 => 0,
            VideoRotation::Deg90 => 90,
            VideoRotation::Deg180 => 180,
            VideoRotation::Deg270 => 270,
        }
    }
}

impl TryFrom<u32> for VideoRotation {
    type Error = &'static str;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err("rotation must be 0, 90, 180 or 270 degrees"),
        }
    }
}

/// Display handle for remote video. Receives every remote video source fanned
/// out by the provider it was created on, keeping the most recent one.
pub struct VideoView {
    inner: Arc<ViewInner>,
    provider: VideoSourceProvider,
    listener: ListenerId,
}

struct ViewInner {
    width: u32,
    height: u32,
    rotation: Mutex<VideoRotation>,
    source: Mutex<Option<MediaSource>>,
}

impl VideoView {
    pub fn new(
        provider: &VideoSourceProvider,
        width: u32,
        height: u32,
        rotation: VideoRotation,
    ) -> Self {
        let inner = Arc::new(ViewInner {
            width,
            height,
            rotation: Mutex::new(rotation),
            source: Mutex::new(None),
        });
        let listener = provider.add_media_source_listener(Box::new({
            let inner = inner.clone();
            move |source| {
                trace!("video view received remote source: {}", source.id());
                *inner.source.lock() = Some(source);
            }
        }));
        Self { inner, provider: provider.clone(), listener }
    }

    /// The most recent remote video source delivered to this view, if any.
    pub fn current_source(&self) -> Option<MediaSource> {
        self.inner.source.lock().clone()
    }

    pub fn width(&self) -> u32 {
        self.inner.width
    }

    pub fn height(&self) -> u32 {
        self.inner.height
    }

    pub fn rotation(&self) -> VideoRotation {
        *self.inner.rotation.lock()
    }

    pub fn set_rotation(&self, rotation: VideoRotation) {
        *self.inner.rotation.lock() = rotation;
    }

    /// Unregisters the view from its provider; later sources are not
    /// delivered.
    pub fn close(&mut self) {
        if self.provider.remove_media_source_listener(self.listener) {
            trace!("video view detached");
        }
    }
}

impl Drop for VideoView {
    fn drop(&mut self) {
        self.close();
    }
}

impl Debug for VideoView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoView")
            .field("width", &self.inner.width)
            .field("height", &self.inner.height)
            .field("rotation", &self.rotation())
            .field("source", &self.current_source())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{media_source::SourceOrigin, MediaType};

    fn remote_video() -> MediaSource {
        MediaSource::new("remote", MediaType::Video, SourceOrigin::Remote)
    }

    #[test]
    fn keeps_most_recent_source() {
        let provider = VideoSourceProvider::new();
        let view = VideoView::new(&provider, 640, 480, VideoRotation::Deg0);
        assert_eq!(view.current_source(), None);

        let first = remote_video();
        let second = remote_video();
        provider.notify_listeners(&first);
        provider.notify_listeners(&second);
        assert_eq!(view.current_source(), Some(second));
    }

    #[test]
    fn closed_view_stops_receiving() {
        let provider = VideoSourceProvider::new();
        let mut view = VideoView::new(&provider, 0, 0, VideoRotation::Deg0);
        view.close();

        provider.notify_listeners(&remote_video());
        assert_eq!(view.current_source(), None);
    }

    #[test]
    fn rotation_conversion_accepts_right_angles_only() {
        for (degrees, rotation) in [
            (0, VideoRotation::Deg0),
            (90, VideoRotation::Deg90),
            (180, VideoRotation::Deg180),
            (270, VideoRotation::Deg270),
        ] {
            assert_eq!(VideoRotation::try_from(degrees), Ok(rotation));
            assert_eq!(rotation.degrees(), degrees);
        }
        assert!(VideoRotation::try_from(45).is_err());
        assert!(VideoRotation::try_from(360).is_err());
    }
}

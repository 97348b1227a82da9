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

pub use crate::audio_renderer::AudioRenderer;
pub use crate::listener_set::{ListenerId, MediaSourceListener, MediaSourceListenerSet};
pub use crate::media_source::{MediaSource, SourceOrigin};
pub use crate::provider::{CaptureSourceProvider, MediaSourceProvider, VideoSourceProvider};
pub use crate::stream::{
    InvalidStreamMode, MediaSourceDelegate, MediaStream, StreamMode, StreamSet,
};
pub use crate::stream_set::{SimpleMediaStream, SimpleStreamSet, StreamSetConfig};
pub use crate::video_view::{VideoRotation, VideoView};
pub use crate::MediaType;

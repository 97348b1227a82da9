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

use std::{str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{media_source::MediaSource, MediaType};

/// Consumer of a stream's local captured source, installed by the session
/// layer.
pub type MediaSourceDelegate = Box<dyn FnMut(MediaSource) + Send + Sync>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamMode {
    #[serde(rename = "sendrecv")]
    SendReceive,
    #[serde(rename = "sendonly")]
    SendOnly,
    #[serde(rename = "recvonly")]
    ReceiveOnly,
    #[serde(rename = "inactive")]
    Inactive,
}

impl StreamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamMode::SendReceive => "sendrecv",
            StreamMode::SendOnly => "sendonly",
            StreamMode::ReceiveOnly => "recvonly",
            StreamMode::Inactive => "inactive",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown stream mode: {0}")]
pub struct InvalidStreamMode(pub String);

impl FromStr for StreamMode {
    type Err = InvalidStreamMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sendrecv" => Ok(StreamMode::SendReceive),
            "sendonly" => Ok(StreamMode::SendOnly),
            "recvonly" => Ok(StreamMode::ReceiveOnly),
            "inactive" => Ok(StreamMode::Inactive),
            _ => Err(InvalidStreamMode(s.to_owned())),
        }
    }
}

/// One directional or bidirectional media flow of a fixed type within a call
/// session.
pub trait MediaStream: Send + Sync {
    /// Stable identity, generated at construction.
    fn id(&self) -> String;

    fn media_type(&self) -> MediaType;

    /// Whether the local side intends to send this media. Queried by the
    /// session layer to decide whether to offer this direction.
    fn want_send(&self) -> bool;

    /// Whether the local side intends to receive this media.
    fn want_receive(&self) -> bool;

    /// Called by the session layer when a remote source has been negotiated
    /// for this stream.
    fn on_remote_media_source(&self, source: MediaSource);

    /// Installs (or clears, via `None`) the consumer of this stream's local
    /// captured source. If a source is already held, it is delivered to the
    /// new delegate before this returns. Delivery runs under the stream lock;
    /// the delegate must not call back into the same stream.
    fn set_media_source_delegate(&self, delegate: Option<MediaSourceDelegate>);

    fn set_stream_mode(&self, mode: StreamMode);

    /// The last mode passed to [`set_stream_mode`], `None` before any set.
    ///
    /// [`set_stream_mode`]: MediaStream::set_stream_mode
    fn stream_mode(&self) -> Option<StreamMode>;
}

/// The fixed collection of streams representing one configured call.
pub trait StreamSet: Send + Sync {
    /// The configured streams, in negotiation order.
    fn streams(&self) -> Vec<Arc<dyn MediaStream>>;
}

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

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MediaType;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
    Capture,
    Remote,
}

/// Handle to a producer of audio or video samples owned by the native engine,
/// either a capture device or a decoded remote stream.
#[derive(Clone)]
pub struct MediaSource {
    inner: Arc<SourceInner>,
}

struct SourceInner {
    id: String,
    name: String,
    media_type: MediaType,
    origin: SourceOrigin,
}

impl MediaSource {
    pub fn new(name: &str, media_type: MediaType, origin: SourceOrigin) -> Self {
        Self {
            inner: Arc::new(SourceInner {
                id: Uuid::new_v4().to_string(),
                name: name.to_owned(),
                media_type,
                origin,
            }),
        }
    }

    pub fn id(&self) -> String {
        self.inner.id.clone()
    }

    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    pub fn media_type(&self) -> MediaType {
        self.inner.media_type
    }

    pub fn origin(&self) -> SourceOrigin {
        self.inner.origin
    }
}

impl PartialEq for MediaSource {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for MediaSource {}

impl Debug for MediaSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaSource")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("media_type", &self.inner.media_type)
            .field("origin", &self.inner.origin)
            .finish()
    }
}

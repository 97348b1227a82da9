use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

use log::{info, trace};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    audio_renderer::AudioRenderer,
    media_source::MediaSource,
    provider::{MediaSourceProvider, VideoSourceProvider},
    stream::{MediaSourceDelegate, MediaStream, StreamMode, StreamSet},
    video_view::{VideoRotation, VideoView},
    MediaType,
};

fn default_receive() -> bool {
    true
}

/// Direction intents for one call. Audio and video directions are
/// independent; a stream may be send-only, receive-only, both, or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSetConfig {
    pub send_audio: bool,
    pub send_video: bool,
    #[serde(default = "default_receive")]
    pub receive_audio: bool,
    #[serde(default = "default_receive")]
    pub receive_video: bool,
}

impl Default for StreamSetConfig {
    fn default() -> Self {
        Self { send_audio: true, send_video: true, receive_audio: true, receive_video: true }
    }
}

/// Configuration for a basic two-way audio/video call: one audio stream and
/// one video stream wired to the given capture providers, a shared audio
/// renderer for the remote side, and a provider handing remote video sources
/// to views.
pub struct SimpleStreamSet {
    audio_stream: SimpleMediaStream,
    video_stream: SimpleMediaStream,
    audio_renderer: AudioRenderer,
    remote_video_provider: VideoSourceProvider,
}

impl SimpleStreamSet {
    /// Creates a configuration for setting up a basic audio/video call.
    /// Both receive directions default to enabled; media may still be
    /// received when the matching send flag is off.
    pub fn new(
        audio_provider: &dyn MediaSourceProvider,
        video_provider: &dyn MediaSourceProvider,
        send_audio: bool,
        send_video: bool,
    ) -> Self {
        Self::with_config(
            audio_provider,
            video_provider,
            StreamSetConfig { send_audio, send_video, receive_audio: true, receive_video: true },
        )
    }

    pub fn with_config(
        audio_provider: &dyn MediaSourceProvider,
        video_provider: &dyn MediaSourceProvider,
        config: StreamSetConfig,
    ) -> Self {
        let audio_renderer = AudioRenderer::new();
        let remote_video_provider = VideoSourceProvider::new();

        let audio_stream = SimpleMediaStream::new(
            MediaType::Audio,
            config.send_audio,
            config.receive_audio,
            audio_renderer.clone(),
            remote_video_provider.clone(),
        );
        let video_stream = SimpleMediaStream::new(
            MediaType::Video,
            config.send_video,
            config.receive_video,
            audio_renderer.clone(),
            remote_video_provider.clone(),
        );

        audio_provider.add_media_source_listener(Box::new({
            let stream = audio_stream.clone();
            move |source| stream.set_media_source(source)
        }));
        video_provider.add_media_source_listener(Box::new({
            let stream = video_stream.clone();
            move |source| stream.set_media_source(source)
        }));

        Self { audio_stream, video_stream, audio_renderer, remote_video_provider }
    }

    /// Returns a view that is handed every remote video source arriving after
    /// this call. More than one view may be created.
    pub fn create_remote_view(&self) -> VideoView {
        VideoView::new(&self.remote_video_provider, 0, 0, VideoRotation::Deg0)
    }

    /// The current audio renderer pipeline graph in dot format.
    pub fn dump_pipeline_graph(&self) -> String {
        self.audio_renderer.dot_data()
    }
}

impl StreamSet for SimpleStreamSet {
    fn streams(&self) -> Vec<Arc<dyn MediaStream>> {
        vec![Arc::new(self.audio_stream.clone()), Arc::new(self.video_stream.clone())]
    }
}

impl Debug for SimpleStreamSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleStreamSet")
            .field("audio_stream", &self.audio_stream)
            .field("video_stream", &self.video_stream)
            .finish()
    }
}

/// Stream binding one local/remote media source pair to one media type.
#[derive(Clone)]
pub struct SimpleMediaStream {
    inner: Arc<StreamInner>,
}

struct StreamInner {
    id: String,
    media_type: MediaType,
    want_send: bool,
    want_receive: bool,
    audio_renderer: AudioRenderer,
    remote_video_provider: VideoSourceProvider,
    state: Mutex<StreamState>,
}

#[derive(Default)]
struct StreamState {
    source: Option<MediaSource>,
    delegate: Option<MediaSourceDelegate>,
    mode: Option<StreamMode>,
}

impl SimpleMediaStream {
    fn new(
        media_type: MediaType,
        want_send: bool,
        want_receive: bool,
        audio_renderer: AudioRenderer,
        remote_video_provider: VideoSourceProvider,
    ) -> Self {
        Self {
            inner: Arc::new(StreamInner {
                id: Uuid::new_v4().to_string(),
                media_type,
                want_send,
                want_receive,
                audio_renderer,
                remote_video_provider,
                state: Mutex::new(StreamState::default()),
            }),
        }
    }

    /// Called by the capture provider when a local source is ready or
    /// replaced. Runs under the same lock as delegate installation, so the
    /// delegate sees every source exactly once.
    pub(crate) fn set_media_source(&self, source: MediaSource) {
        let mut state = self.inner.state.lock();
        trace!("{:?} stream {}: local source {}", self.inner.media_type, self.inner.id, source.id());
        state.source = Some(source.clone());
        if let Some(delegate) = state.delegate.as_mut() {
            delegate(source);
        }
    }
}

impl MediaStream for SimpleMediaStream {
    fn id(&self) -> String {
        self.inner.id.clone()
    }

    fn media_type(&self) -> MediaType {
        self.inner.media_type
    }

    fn want_send(&self) -> bool {
        self.inner.want_send
    }

    fn want_receive(&self) -> bool {
        self.inner.want_receive
    }

    fn on_remote_media_source(&self, source: MediaSource) {
        trace!(
            "{:?} stream {}: remote source {}",
            self.inner.media_type,
            self.inner.id,
            source.id()
        );
        match self.inner.media_type {
            MediaType::Video => self.inner.remote_video_provider.notify_listeners(&source),
            MediaType::Audio => self.inner.audio_renderer.set_source(source),
        }
    }

    fn set_media_source_delegate(&self, delegate: Option<MediaSourceDelegate>) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;
        state.delegate = delegate;
        if let (Some(source), Some(delegate)) = (&state.source, state.delegate.as_mut()) {
            delegate(source.clone());
        }
    }

    fn set_stream_mode(&self, mode: StreamMode) {
        info!("{:?} stream mode set: {}", self.inner.media_type, mode.as_str());
        self.inner.state.lock().mode = Some(mode);
    }

    fn stream_mode(&self) -> Option<StreamMode> {
        self.inner.state.lock().mode
    }
}

impl Debug for SimpleMediaStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleMediaStream")
            .field("id", &self.inner.id)
            .field("media_type", &self.inner.media_type)
            .field("want_send", &self.inner.want_send)
            .field("want_receive", &self.inner.want_receive)
            .finish()
    }
}

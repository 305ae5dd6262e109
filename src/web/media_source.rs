use crate::player::PlaybackSource;
use tracing::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// `<audio>` element as a playback source.
pub struct MediaElementSource {
    audio: HtmlAudioElement,
}

impl MediaElementSource {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl PlaybackSource for MediaElementSource {
    fn load(&mut self, src: &str) {
        self.audio.set_src(src);
    }

    fn play(&mut self) {
        match self.audio.play() {
            // Autoplay policy rejections arrive through the promise.
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    warn!(?err, "audio playback was rejected");
                }
            }),
            Err(err) => warn!(?err, "audio playback could not start"),
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            warn!(?err, "audio pause failed");
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume.clamp(0.0, 1.0));
    }

    fn seek_to(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.audio.duration();
        // NaN before metadata, +Infinity for live streams.
        if duration.is_finite() && duration >= 0.0 {
            Some(duration)
        } else {
            None
        }
    }

    fn buffered_end(&self) -> Option<f64> {
        let ranges = self.audio.buffered();
        let count = ranges.length();
        if count == 0 {
            return None;
        }
        ranges.end(count - 1).ok()
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }
}

use super::{
    ControlSurfaces, FillVar, FrameScheduler, FrameTicket, IconAnimator, Label, PlaybackSource,
    PlayerEvents, TogglePhase, UiState,
};
use crate::config::{ToggleSegments, WidgetConfig};
use crate::utils::{fill_percent, format_known_time, format_time};
use tracing::{debug, info, trace, warn};

/// Shown in both time labels until there is something to show.
const PLACEHOLDER_TIME: &str = "0:00";

struct ToggleIcon<A> {
    animator: A,
    segments: ToggleSegments,
}

impl<A: IconAnimator> ToggleIcon<A> {
    fn rest(&mut self) {
        self.animator.to_frame(self.segments.rest_frame());
    }

    fn transition_to(&mut self, phase: TogglePhase) {
        let range = match phase {
            TogglePhase::Active => self.segments.activate,
            TogglePhase::Inactive => self.segments.deactivate,
        };
        self.animator.play_range(range);
    }
}

/// Mediates between user input, the playback source and the rendered controls
/// of one widget instance.
///
/// Single threaded: adapters call into it from event callbacks, one at a time.
pub struct PlayerController<S, A, U, F> {
    source: S,
    play_icon: ToggleIcon<A>,
    mute_icon: ToggleIcon<A>,
    surfaces: U,
    frames: F,
    ui: UiState,
    /// The one outstanding progress-loop registration, if the loop is running.
    progress: Option<FrameTicket>,
    /// Metadata is applied once per load.
    metadata_loaded: bool,
}

impl<S, A, U, F> PlayerController<S, A, U, F>
where
    S: PlaybackSource,
    A: IconAnimator,
    U: ControlSurfaces,
    F: FrameScheduler,
{
    pub fn bind(
        config: &WidgetConfig,
        source: S,
        play_icon: A,
        mute_icon: A,
        surfaces: U,
        frames: F,
    ) -> Self {
        let mut controller = Self {
            source,
            play_icon: ToggleIcon {
                animator: play_icon,
                segments: config.play_icon.segments,
            },
            mute_icon: ToggleIcon {
                animator: mute_icon,
                segments: config.mute_icon.segments,
            },
            surfaces,
            frames,
            ui: UiState::default(),
            progress: None,
            metadata_loaded: false,
        };

        controller.play_icon.rest();
        controller.mute_icon.rest();
        controller.apply_volume(config.volume);
        controller.load(&config.src);
        controller
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Point the widget at a new resource and reset everything derived from the old one.
    pub fn load(&mut self, src: &str) {
        self.stop_progress();
        if self.ui.play.is_active() {
            self.ui.play = TogglePhase::Inactive;
            self.play_icon.rest();
        }

        self.metadata_loaded = false;
        self.ui.seek_max = None;
        self.ui.buffered_fill = 0.0;
        self.surfaces.set_fill(FillVar::Buffered, 0.0);
        self.surfaces.set_label(Label::Duration, PLACEHOLDER_TIME);
        self.show_position(0.0);

        self.source.load(src);
        info!(src, "audio source assigned");

        // A cached resource can already have its metadata at this point.
        if self.source.duration().is_some() {
            self.on_metadata_ready();
        }
    }

    fn start_progress(&mut self) {
        self.stop_progress();
        self.progress = self.frames.request_frame();
        if self.progress.is_none() {
            warn!("display refresh callback unavailable, progress display stopped");
        }
    }

    fn stop_progress(&mut self) {
        if let Some(ticket) = self.progress.take() {
            self.frames.cancel_frame(ticket);
        }
    }

    /// Clamp a slider value into `0..=max` (or `0..` before metadata).
    fn clamp_seek(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        match self.ui.seek_max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    fn show_position(&mut self, seconds: f64) {
        self.ui.seek_position = seconds;
        self.surfaces.set_seek_value(seconds);
        self.surfaces.set_label(Label::CurrentTime, &format_time(seconds));
        self.refresh_seek_fill();
    }

    fn sample_position(&mut self) {
        let seconds = self.clamp_seek(self.source.current_time()).floor();
        self.show_position(seconds);
    }

    fn refresh_seek_fill(&mut self) {
        let percent = self
            .ui
            .seek_max
            .map(|max| fill_percent(self.ui.seek_position, max))
            .unwrap_or(0.0);
        self.ui.seek_fill = percent;
        self.surfaces.set_fill(FillVar::Seek, percent);
    }

    fn refresh_buffered(&mut self) {
        let Some(max) = self.ui.seek_max else {
            return;
        };
        let Some(end) = self.source.buffered_end() else {
            return;
        };
        let percent = fill_percent(end, max);
        // New data only extends the buffered range within one load.
        if percent > self.ui.buffered_fill {
            self.ui.buffered_fill = percent;
            self.surfaces.set_fill(FillVar::Buffered, percent);
        }
    }

    fn apply_volume(&mut self, value: f64) {
        let value = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let percent = fill_percent(value, 100.0);
        self.ui.volume_position = value;
        self.ui.volume_fill = percent;
        self.surfaces.set_volume_value(value);
        self.surfaces.set_fill(FillVar::Volume, percent);
        self.source.set_volume(value / 100.0);
    }
}

impl<S, A, U, F> PlayerEvents for PlayerController<S, A, U, F>
where
    S: PlaybackSource,
    A: IconAnimator,
    U: ControlSurfaces,
    F: FrameScheduler,
{
    fn on_play_clicked(&mut self) {
        let next = self.ui.play.flipped();
        match next {
            TogglePhase::Active => {
                self.source.play();
                self.play_icon.transition_to(next);
                self.start_progress();
            }
            TogglePhase::Inactive => {
                self.source.pause();
                self.play_icon.transition_to(next);
                self.stop_progress();
            }
        }
        self.ui.play = next;
        debug!(playing = next.is_active(), "play toggled");
    }

    fn on_mute_clicked(&mut self) {
        let next = self.ui.mute.flipped();
        self.mute_icon.transition_to(next);
        self.source.set_muted(next.is_active());
        self.ui.mute = next;
        debug!(muted = next.is_active(), "mute toggled");
    }

    fn on_seek_input(&mut self, value: f64) {
        let value = self.clamp_seek(value);
        self.show_position(value);
        // The loop would overwrite the drag position on its next tick.
        if self.ui.play.is_active() {
            self.stop_progress();
        }
    }

    fn on_seek_commit(&mut self, value: f64) {
        let value = self.clamp_seek(value);
        self.source.seek_to(value);
        self.show_position(value);
        if self.ui.play.is_active() {
            self.start_progress();
        }
    }

    fn on_volume_input(&mut self, value: f64) {
        self.apply_volume(value);
    }

    fn on_metadata_ready(&mut self) {
        if self.metadata_loaded {
            trace!("metadata already applied for this load");
            return;
        }
        let Some((duration, text)) = self
            .source
            .duration()
            .and_then(|duration| format_known_time(duration).map(|text| (duration, text)))
        else {
            debug!("metadata notification without a usable duration");
            return;
        };

        self.metadata_loaded = true;
        let max = duration.floor();
        self.ui.seek_max = Some(max);
        self.surfaces.set_seek_max(max);
        self.surfaces.set_label(Label::Duration, &text);
        self.refresh_seek_fill();
        self.refresh_buffered();
        info!(duration, "metadata ready");
    }

    fn on_buffer_progress(&mut self) {
        self.refresh_buffered();
    }

    fn on_playback_ended(&mut self) {
        if !self.ui.play.is_active() {
            return;
        }
        self.stop_progress();
        self.ui.play = TogglePhase::Inactive;
        self.play_icon.transition_to(TogglePhase::Inactive);
        self.sample_position();
        debug!("playback ended");
    }

    fn on_progress_tick(&mut self, ticket: FrameTicket) {
        if self.progress != Some(ticket) {
            trace!(?ticket, "ignoring cancelled progress tick");
            return;
        }
        self.progress = None;
        self.sample_position();
        // The source stopped without a click, e.g. a rejected play request.
        if self.source.is_paused() {
            self.ui.play = TogglePhase::Inactive;
            self.play_icon.transition_to(TogglePhase::Inactive);
            debug!("source paused itself, progress loop stopped");
            return;
        }
        self.progress = self.frames.request_frame();
    }

    fn release(&mut self) {
        self.stop_progress();
        if !self.source.is_paused() {
            self.source.pause();
        }
        if self.ui.play.is_active() {
            self.ui.play = TogglePhase::Inactive;
            self.play_icon.rest();
        }
        debug!("player released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameRange;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    enum SourceCall {
        Load(String),
        Play,
        Pause,
        Muted(bool),
        Volume(f64),
        Seek(f64),
    }

    struct FakeSource {
        calls: Vec<SourceCall>,
        time: f64,
        duration: Option<f64>,
        buffered: Option<f64>,
        paused: bool,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                time: 0.0,
                duration: None,
                buffered: None,
                paused: true,
            }
        }

        fn with_duration(duration: f64) -> Self {
            Self {
                duration: Some(duration),
                ..Self::new()
            }
        }
    }

    impl PlaybackSource for FakeSource {
        fn load(&mut self, src: &str) {
            self.paused = true;
            self.calls.push(SourceCall::Load(src.to_string()));
        }
        fn play(&mut self) {
            self.paused = false;
            self.calls.push(SourceCall::Play);
        }
        fn pause(&mut self) {
            self.paused = true;
            self.calls.push(SourceCall::Pause);
        }
        fn set_muted(&mut self, muted: bool) {
            self.calls.push(SourceCall::Muted(muted));
        }
        fn set_volume(&mut self, volume: f64) {
            self.calls.push(SourceCall::Volume(volume));
        }
        fn seek_to(&mut self, seconds: f64) {
            self.time = seconds;
            self.calls.push(SourceCall::Seek(seconds));
        }
        fn current_time(&self) -> f64 {
            self.time
        }
        fn duration(&self) -> Option<f64> {
            self.duration
        }
        fn buffered_end(&self) -> Option<f64> {
            self.buffered
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum IconCall {
        Frame(u32),
        Range(FrameRange),
    }

    #[derive(Default)]
    struct FakeAnimator {
        calls: Vec<IconCall>,
    }

    impl IconAnimator for FakeAnimator {
        fn to_frame(&mut self, frame: u32) {
            self.calls.push(IconCall::Frame(frame));
        }
        fn play_range(&mut self, range: FrameRange) {
            self.calls.push(IconCall::Range(range));
        }
    }

    #[derive(Default)]
    struct FakeSurfaces {
        labels: HashMap<Label, String>,
        seek_max: Option<f64>,
        seek_value: f64,
        volume_value: f64,
        fills: HashMap<FillVar, f64>,
        buffered_writes: usize,
    }

    impl ControlSurfaces for FakeSurfaces {
        fn set_label(&mut self, label: Label, text: &str) {
            self.labels.insert(label, text.to_string());
        }
        fn set_seek_max(&mut self, max: f64) {
            self.seek_max = Some(max);
        }
        fn set_seek_value(&mut self, value: f64) {
            self.seek_value = value;
        }
        fn set_volume_value(&mut self, value: f64) {
            self.volume_value = value;
        }
        fn set_fill(&mut self, var: FillVar, percent: f64) {
            if var == FillVar::Buffered {
                self.buffered_writes += 1;
            }
            self.fills.insert(var, percent);
        }
    }

    #[derive(Default)]
    struct FakeFrames {
        next: i32,
        pending: Vec<FrameTicket>,
        cancelled: Vec<FrameTicket>,
    }

    impl FrameScheduler for FakeFrames {
        fn request_frame(&mut self) -> Option<FrameTicket> {
            self.next += 1;
            let ticket = FrameTicket(self.next);
            self.pending.push(ticket);
            Some(ticket)
        }
        fn cancel_frame(&mut self, ticket: FrameTicket) {
            self.pending.retain(|pending| *pending != ticket);
            self.cancelled.push(ticket);
        }
    }

    type TestController = PlayerController<FakeSource, FakeAnimator, FakeSurfaces, FakeFrames>;

    fn bind(source: FakeSource) -> TestController {
        PlayerController::bind(
            &WidgetConfig::new("song.mp3"),
            source,
            FakeAnimator::default(),
            FakeAnimator::default(),
            FakeSurfaces::default(),
            FakeFrames::default(),
        )
    }

    /// Deliver the oldest pending display refresh, like the browser would.
    fn fire_frame(controller: &mut TestController) -> bool {
        if controller.frames.pending.is_empty() {
            return false;
        }
        let ticket = controller.frames.pending.remove(0);
        controller.on_progress_tick(ticket);
        true
    }

    fn label(controller: &TestController, label: Label) -> &str {
        controller
            .surfaces
            .labels
            .get(&label)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn bind_rests_glyphs_and_assigns_source() {
        let controller = bind(FakeSource::new());

        assert_eq!(controller.play_icon.animator.calls, vec![IconCall::Frame(15)]);
        assert_eq!(controller.mute_icon.animator.calls, vec![IconCall::Frame(0)]);
        assert_eq!(
            controller.source.calls,
            vec![
                SourceCall::Volume(1.0),
                SourceCall::Load("song.mp3".to_string())
            ]
        );
        assert_eq!(label(&controller, Label::CurrentTime), "0:00");
        assert_eq!(label(&controller, Label::Duration), "0:00");
        assert_eq!(controller.ui().seek_max, None);
        assert_eq!(controller.ui().play, TogglePhase::Inactive);
        assert_eq!(controller.ui().mute, TogglePhase::Inactive);
        assert!(controller.frames.pending.is_empty());
    }

    #[test]
    fn metadata_known_at_bind_is_applied_immediately() {
        let mut source = FakeSource::with_duration(128.9);
        source.buffered = Some(32.0);
        let controller = bind(source);

        assert_eq!(controller.ui().seek_max, Some(128.0));
        assert_eq!(controller.surfaces.seek_max, Some(128.0));
        assert_eq!(label(&controller, Label::Duration), "2:08");
        assert_close(controller.ui().buffered_fill, 25.0);
    }

    #[test]
    fn late_metadata_matches_metadata_known_at_bind() {
        let mut cached = FakeSource::with_duration(128.9);
        cached.buffered = Some(32.0);
        let cached = bind(cached);

        let mut streamed = bind(FakeSource::new());
        assert_eq!(streamed.ui().seek_max, None);
        streamed.source.duration = Some(128.9);
        streamed.source.buffered = Some(32.0);
        streamed.on_metadata_ready();

        assert_eq!(streamed.ui(), cached.ui());
        assert_eq!(
            label(&streamed, Label::Duration),
            label(&cached, Label::Duration)
        );
        assert_eq!(streamed.surfaces.seek_max, cached.surfaces.seek_max);
    }

    #[test]
    fn metadata_applies_once_per_load() {
        let mut controller = bind(FakeSource::with_duration(65.0));
        controller.source.duration = Some(300.0);
        controller.on_metadata_ready();
        assert_eq!(controller.ui().seek_max, Some(65.0));
        assert_eq!(label(&controller, Label::Duration), "1:05");

        controller.source.duration = None;
        controller.load("next.mp3");
        assert_eq!(controller.ui().seek_max, None);
        controller.source.duration = Some(600.0);
        controller.on_metadata_ready();
        assert_eq!(controller.ui().seek_max, Some(600.0));
        assert_eq!(label(&controller, Label::Duration), "10:00");
    }

    #[test]
    fn metadata_without_duration_changes_nothing() {
        let mut controller = bind(FakeSource::new());
        controller.source.duration = Some(f64::NAN);
        controller.on_metadata_ready();
        assert_eq!(controller.ui().seek_max, None);
        assert_eq!(label(&controller, Label::Duration), "0:00");

        controller.source.duration = Some(9.5);
        controller.on_metadata_ready();
        assert_eq!(label(&controller, Label::Duration), "0:09");
    }

    #[test]
    fn play_toggle_round_trip() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        let initial = controller.ui().play;

        controller.on_play_clicked();
        assert_eq!(controller.ui().play, TogglePhase::Active);
        assert!(!controller.source.is_paused());
        assert_eq!(
            controller.play_icon.animator.calls.last(),
            Some(&IconCall::Range(FrameRange::new(15, 27)))
        );
        assert_eq!(controller.frames.pending.len(), 1);

        controller.on_play_clicked();
        assert_eq!(controller.ui().play, initial);
        assert!(controller.source.is_paused());
        assert_eq!(
            controller.play_icon.animator.calls.last(),
            Some(&IconCall::Range(FrameRange::new(0, 15)))
        );
        assert!(controller.frames.pending.is_empty());
        assert_eq!(controller.frames.cancelled.len(), 1);
    }

    #[test]
    fn progress_tick_samples_and_reschedules() {
        let mut controller = bind(FakeSource::with_duration(256.0));
        controller.on_play_clicked();
        controller.source.time = 64.7;

        assert!(fire_frame(&mut controller));
        assert_eq!(controller.ui().seek_position, 64.0);
        assert_eq!(controller.surfaces.seek_value, 64.0);
        assert_eq!(label(&controller, Label::CurrentTime), "1:04");
        assert_close(controller.ui().seek_fill, 25.0);
        assert_eq!(controller.frames.pending, vec![FrameTicket(2)]);

        controller.source.time = 128.2;
        assert!(fire_frame(&mut controller));
        assert_close(controller.ui().seek_fill, 50.0);
        assert_eq!(controller.frames.pending.len(), 1);
    }

    #[test]
    fn cancelled_tick_never_reschedules() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        controller.on_play_clicked();
        let stale = controller.frames.pending[0];
        controller.on_play_clicked();

        controller.source.time = 30.0;
        controller.on_progress_tick(stale);
        assert!(controller.frames.pending.is_empty());
        assert_eq!(controller.ui().seek_position, 0.0);
    }

    #[test]
    fn seek_drag_suspends_loop_until_commit() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        controller.on_play_clicked();
        let running = controller.frames.pending[0];

        controller.on_seek_input(40.0);
        assert!(controller.frames.pending.is_empty());
        assert_eq!(controller.frames.cancelled, vec![running]);
        assert_eq!(label(&controller, Label::CurrentTime), "0:40");
        assert_close(controller.ui().seek_fill, 40.0);

        // A tick from before the drag must not move the slider back.
        controller.source.time = 5.0;
        controller.on_progress_tick(running);
        controller.on_seek_input(50.0);
        assert!(!fire_frame(&mut controller));
        assert_eq!(controller.ui().seek_position, 50.0);

        controller.on_seek_commit(50.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Seek(50.0)));
        assert_eq!(controller.frames.pending.len(), 1);
        assert!(fire_frame(&mut controller));
        assert_eq!(controller.ui().seek_position, 50.0);
    }

    #[test]
    fn seeking_while_paused_does_not_start_loop() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        controller.on_seek_input(12.0);
        controller.on_seek_commit(12.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Seek(12.0)));
        assert!(controller.frames.pending.is_empty());
        assert_eq!(label(&controller, Label::CurrentTime), "0:12");
    }

    #[test]
    fn seek_values_are_clamped_to_slider_range() {
        let mut controller = bind(FakeSource::with_duration(60.0));
        controller.on_seek_commit(90.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Seek(60.0)));
        controller.on_seek_commit(-3.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Seek(0.0)));
    }

    #[test]
    fn volume_slider_sets_fill_and_source_volume() {
        let mut controller = bind(FakeSource::new());
        assert_close(controller.ui().volume_fill, 100.0);

        controller.on_volume_input(30.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Volume(0.3)));
        assert_close(controller.ui().volume_fill, 30.0);
        assert_close(controller.surfaces.fills[&FillVar::Volume], 30.0);

        controller.on_volume_input(150.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Volume(1.0)));
        controller.on_volume_input(-5.0);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Volume(0.0)));
        assert_close(controller.surfaces.fills[&FillVar::Volume], 0.0);
    }

    #[test]
    fn mute_toggle_plays_matching_segments() {
        let mut controller = bind(FakeSource::new());

        controller.on_mute_clicked();
        assert_eq!(controller.ui().mute, TogglePhase::Active);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Muted(true)));
        assert_eq!(
            controller.mute_icon.animator.calls.last(),
            Some(&IconCall::Range(FrameRange::new(0, 17)))
        );

        controller.on_mute_clicked();
        assert_eq!(controller.ui().mute, TogglePhase::Inactive);
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Muted(false)));
        assert_eq!(
            controller.mute_icon.animator.calls.last(),
            Some(&IconCall::Range(FrameRange::new(17, 26)))
        );
        assert!(controller.play_icon.animator.calls.len() == 1);
    }

    #[test]
    fn buffered_fill_never_decreases() {
        let mut controller = bind(FakeSource::new());
        controller.source.buffered = Some(10.0);
        controller.on_buffer_progress();
        assert_eq!(controller.ui().buffered_fill, 0.0);

        controller.source.duration = Some(128.0);
        controller.on_metadata_ready();
        assert_close(controller.ui().buffered_fill, 100.0 * 10.0 / 128.0);

        controller.source.buffered = Some(64.0);
        controller.on_buffer_progress();
        assert_close(controller.ui().buffered_fill, 50.0);

        let writes = controller.surfaces.buffered_writes;
        controller.source.buffered = Some(32.0);
        controller.on_buffer_progress();
        assert_close(controller.ui().buffered_fill, 50.0);
        assert_eq!(controller.surfaces.buffered_writes, writes);
    }

    #[test]
    fn ended_returns_to_play_glyph_and_stops_loop() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        controller.on_play_clicked();
        controller.source.time = 99.6;

        controller.on_playback_ended();
        assert_eq!(controller.ui().play, TogglePhase::Inactive);
        assert!(controller.frames.pending.is_empty());
        assert_eq!(controller.ui().seek_position, 99.0);
        assert_eq!(
            controller.play_icon.animator.calls.last(),
            Some(&IconCall::Range(FrameRange::new(0, 15)))
        );

        let icon_calls = controller.play_icon.animator.calls.len();
        controller.on_playback_ended();
        assert_eq!(controller.play_icon.animator.calls.len(), icon_calls);
    }

    #[test]
    fn reload_resets_load_derived_state() {
        let mut source = FakeSource::with_duration(200.0);
        source.buffered = Some(100.0);
        let mut controller = bind(source);
        controller.on_play_clicked();

        controller.source.duration = None;
        controller.load("other.mp3");
        assert_eq!(controller.ui().play, TogglePhase::Inactive);
        assert_eq!(controller.ui().seek_max, None);
        assert_eq!(controller.ui().buffered_fill, 0.0);
        assert!(controller.frames.pending.is_empty());
        assert_eq!(controller.play_icon.animator.calls.last(), Some(&IconCall::Frame(15)));
        assert_eq!(
            controller.source.calls.last(),
            Some(&SourceCall::Load("other.mp3".to_string()))
        );
    }

    #[test]
    fn release_cancels_loop_and_pauses() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        controller.on_play_clicked();
        controller.release();
        assert!(controller.frames.pending.is_empty());
        assert!(controller.source.is_paused());
        assert_eq!(controller.ui().play, TogglePhase::Inactive);
        assert_eq!(controller.play_icon.animator.calls.last(), Some(&IconCall::Frame(15)));
    }

    #[test]
    fn release_while_paused_leaves_glyph_alone() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        let icon_calls = controller.play_icon.animator.calls.len();
        controller.release();
        assert_eq!(controller.play_icon.animator.calls.len(), icon_calls);
        assert!(!controller.source.calls.contains(&SourceCall::Pause));
    }

    #[test]
    fn source_pausing_itself_stops_loop_and_restores_play_glyph() {
        let mut controller = bind(FakeSource::with_duration(100.0));
        controller.on_play_clicked();
        controller.source.time = 3.4;
        // A rejected play request leaves the element paused.
        controller.source.paused = true;

        assert!(fire_frame(&mut controller));
        assert_eq!(controller.ui().play, TogglePhase::Inactive);
        assert!(controller.frames.pending.is_empty());
        assert_eq!(controller.ui().seek_position, 3.0);
        assert_eq!(
            controller.play_icon.animator.calls.last(),
            Some(&IconCall::Range(FrameRange::new(0, 15)))
        );

        // The next click starts playback again instead of pausing.
        controller.on_play_clicked();
        assert_eq!(controller.source.calls.last(), Some(&SourceCall::Play));
        assert_eq!(controller.frames.pending.len(), 1);
    }
}

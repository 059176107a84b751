//! Audio player (Winamp-style) playlist and transport state
//!
//! Only the model lives here; decoding and audio output belong to the page.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::AudioConfig;

static AUDIO_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(mp3|flac|ogg|wav)$").expect("static regex"));

const ZERO_TIME: &str = "00:00 / 00:00";

/// One playlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: String,
    pub name: String,
}

/// Player state
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    tracks: Vec<Track>,
    current: usize,
    /// A track has been loaded at least once
    loaded: bool,
    playing: bool,
    volume: u8,
    /// Playback position and track length in seconds; zero until reported
    elapsed: f64,
    duration: f64,
    title_display: String,
    time_display: String,
}

impl AudioPlayer {
    pub fn new(config: &AudioConfig) -> Self {
        let tracks: Vec<Track> = config
            .playlist
            .iter()
            .map(|path| Track {
                path: path.clone(),
                name: display_name(path),
            })
            .collect();
        let title_display = if tracks.is_empty() {
            "(empty playlist)".to_string()
        } else {
            String::new()
        };

        debug!("Audio player loaded {} tracks", tracks.len());
        Self {
            tracks,
            current: 0,
            loaded: false,
            playing: false,
            volume: config.volume.min(100),
            elapsed: 0.0,
            duration: 0.0,
            title_display,
            time_display: ZERO_TIME.to_string(),
        }
    }

    /// Resume the loaded track, or start the first one
    pub fn play(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        if self.loaded {
            self.playing = true;
        } else {
            self.play_track(0);
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.elapsed = 0.0;
        self.title_display = "** STOPPED **".to_string();
        self.time_display = ZERO_TIME.to_string();
    }

    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.play_track((self.current + 1) % self.tracks.len());
    }

    pub fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let prev = self.current.checked_sub(1).unwrap_or(self.tracks.len() - 1);
        self.play_track(prev);
    }

    /// The current track finished: advance with wrap-around
    pub fn track_ended(&mut self) {
        self.next();
    }

    /// Jump to a track; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            return false;
        }
        self.play_track(index);
        true
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    /// Progress reported by the audio element; ignored until the length is known
    pub fn set_position(&mut self, elapsed_secs: f64, duration_secs: f64) {
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return;
        }
        self.duration = duration_secs;
        self.elapsed = elapsed_secs.clamp(0.0, duration_secs);
        self.refresh_time();
    }

    /// Jump to `percent` (0-100) of the current track
    pub fn seek(&mut self, percent: f64) -> bool {
        if self.duration <= 0.0 || !percent.is_finite() {
            return false;
        }
        self.elapsed = percent.clamp(0.0, 100.0) / 100.0 * self.duration;
        self.refresh_time();
        true
    }

    /// Position as a percentage of the track, for the progress bar
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            self.elapsed / self.duration * 100.0
        } else {
            0.0
        }
    }

    fn refresh_time(&mut self) {
        self.time_display = format!("{} / {}", format_time(self.elapsed), format_time(self.duration));
    }

    fn play_track(&mut self, index: usize) {
        let Some(track) = self.tracks.get(index) else {
            return;
        };
        self.current = index;
        self.loaded = true;
        self.playing = true;
        self.title_display = format!("♫ {}", track.name);
        self.elapsed = 0.0;
        self.duration = 0.0;
        self.time_display = ZERO_TIME.to_string();
        debug!("Playing track {}: {}", index, track.path);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current(&self) -> Option<&Track> {
        self.loaded.then(|| self.tracks.get(self.current)).flatten()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn title_display(&self) -> &str {
        &self.title_display
    }

    pub fn time_display(&self) -> &str {
        &self.time_display
    }
}

/// `assets/music/smiths-thischarmingman.flac` → `Smiths - Thischarmingman`
pub fn display_name(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = AUDIO_EXTENSION.replace(file, "");

    match stem.split_once('-') {
        Some((artist, title)) => format!("{} - {}", capitalize(artist), capitalize(title)),
        None => stem.to_string(),
    }
}

/// Whole seconds as `MM:SS`
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(paths: &[&str]) -> AudioPlayer {
        AudioPlayer::new(&AudioConfig {
            playlist: paths.iter().map(|p| p.to_string()).collect(),
            volume: 70,
        })
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name("assets/music/moby-go.flac"), "Moby - Go");
        assert_eq!(display_name("assets/music/a-b-c.MP3"), "A - B-c");
        assert_eq!(display_name("intro.ogg"), "intro");
        assert_eq!(display_name("notes.txt"), "notes.txt");
    }

    #[test]
    fn time_format() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(65.9), "01:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn play_starts_first_track_then_resumes() {
        let mut p = player(&["a/one-x.mp3", "a/two-y.mp3"]);
        assert!(p.current().is_none());

        p.play();
        assert!(p.is_playing());
        assert_eq!(p.current_index(), 0);
        assert_eq!(p.title_display(), "♫ One - X");

        p.next();
        p.pause();
        p.play();
        assert_eq!(p.current_index(), 1);
        assert!(p.is_playing());
    }

    #[test]
    fn navigation_wraps() {
        let mut p = player(&["a.mp3", "b.mp3", "c.mp3"]);
        p.previous();
        assert_eq!(p.current_index(), 2);
        p.next();
        assert_eq!(p.current_index(), 0);
        p.select(2);
        p.track_ended();
        assert_eq!(p.current_index(), 0);
        assert!(!p.select(3));
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn stop_resets_display() {
        let mut p = player(&["a.mp3"]);
        p.play();
        p.set_position(75.0, 200.0);
        assert_eq!(p.time_display(), "01:15 / 03:20");
        p.stop();
        assert!(!p.is_playing());
        assert_eq!(p.title_display(), "** STOPPED **");
        assert_eq!(p.time_display(), "00:00 / 00:00");
    }

    #[test]
    fn seek_needs_known_duration() {
        let mut p = player(&["a.mp3"]);
        p.play();
        assert!(!p.seek(50.0));
        assert_eq!(p.time_display(), "00:00 / 00:00");

        p.set_position(10.0, 240.0);
        assert!(p.seek(50.0));
        assert_eq!(p.time_display(), "02:00 / 04:00");
        assert_eq!(p.progress_percent(), 50.0);

        assert!(p.seek(150.0));
        assert_eq!(p.time_display(), "04:00 / 04:00");

        // A new track forgets the old length
        p.next();
        assert!(!p.seek(10.0));
        assert_eq!(p.progress_percent(), 0.0);
    }

    #[test]
    fn empty_playlist_ignores_controls() {
        let mut p = player(&[]);
        p.play();
        p.next();
        p.previous();
        assert!(!p.is_playing());
        assert_eq!(p.title_display(), "(empty playlist)");
    }

    #[test]
    fn volume_is_capped() {
        let mut p = player(&["a.mp3"]);
        assert_eq!(p.volume(), 70);
        p.set_volume(250);
        assert_eq!(p.volume(), 100);
    }
}

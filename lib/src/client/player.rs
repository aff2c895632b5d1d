//! Mood driven music player state.
//!
//! A mood change fetches the AI track and the catalog songs side by side,
//! each with its own loading flag, then starts the AI track after a short
//! delay. All audio goes through one [`PlaybackHandle`], so starting any
//! source replaces whatever was playing.
//!
//! Every `load_mood` call bumps a generation number. Results and auto-play
//! that arrive for an older generation are dropped, so a slow answer for a
//! previous mood can never overwrite the current one.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::mood::Mood;
use crate::service::common_structs::Song;
use crate::tables::StaticMusicTables;
use super::MusicSource;

pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(500);
/// How many catalog songs the player lists.
pub const VISIBLE_SONGS: usize = 3;


/// The single audio output shared by every source.
pub trait PlaybackHandle: Send {
    /// Replaces the current source without starting it.
    fn load(&mut self, url: &str);
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NowPlaying {
    AiTrack,
    Song(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub mood: Option<Mood>,
    pub ai_track: Option<String>,
    pub songs: Vec<Song>,
    pub current_song: usize,
    pub now_playing: Option<NowPlaying>,
    pub is_playing: bool,
    pub loading_ai: bool,
    pub loading_songs: bool,
    generation: u64,
}


pub struct MusicPlayer<S, P> {
    source: S,
    playback: Mutex<P>,
    state: Mutex<PlayerState>,
    tables: Arc<StaticMusicTables>,
    autoplay_delay: Duration,
}

impl<S: MusicSource, P: PlaybackHandle> MusicPlayer<S, P> {
    pub fn new(source: S, playback: P, tables: Arc<StaticMusicTables>) -> Self {
        Self {
            source,
            playback: Mutex::new(playback),
            state: Mutex::new(PlayerState::default()),
            tables,
            autoplay_delay: AUTOPLAY_DELAY,
        }
    }

    pub fn with_autoplay_delay(mut self, delay: Duration) -> Self {
        self.autoplay_delay = delay;
        self
    }

    pub async fn snapshot(&self) -> PlayerState {
        self.state.lock().await.clone()
    }

    pub async fn load_mood(&self, mood: Mood) {
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.mood = Some(mood);
            state.loading_ai = true;
            state.loading_songs = true;
            state.ai_track = None;
            // the previous mood's audio stops with the mood change
            if state.now_playing.take().is_some() {
                self.playback.lock().await.pause();
            }
            state.is_playing = false;
            state.generation
        };
        info!(%mood, generation, "loading music");

        let ai = async {
            let result = self.source.ai_track(mood).await;
            let url = {
                let mut state = self.state.lock().await;
                if state.generation != generation {
                    debug!(generation, "dropping stale ai track");
                    return;
                }
                state.loading_ai = false;
                match result {
                    Ok(url) => {
                        state.ai_track = Some(url.clone());
                        url
                    },
                    Err(error) => {
                        warn!(%mood, error = ?error, "ai track unavailable");
                        state.ai_track = None;
                        return;
                    },
                }
            };

            sleep(self.autoplay_delay).await;

            let mut state = self.state.lock().await;
            if state.generation != generation {
                debug!(generation, "skipping stale auto-play");
                return;
            }
            if let Err(error) = self.start(&mut state, NowPlaying::AiTrack, &url).await {
                warn!(error = ?error, "auto-play failed");
            }
        };

        let songs = async {
            let result = self.source.songs(mood).await;
            let mut state = self.state.lock().await;
            if state.generation != generation {
                debug!(generation, "dropping stale songs");
                return;
            }
            state.loading_songs = false;
            state.current_song = 0;
            match result {
                Ok(songs) => state.songs = songs,
                Err(error) => {
                    warn!(%mood, error = ?error, "songs unavailable");
                    state.songs = vec![];
                },
            }
        };

        tokio::join!(ai, songs);
    }

    /// Returns false when there is no AI track to play.
    pub async fn play_ai_track(&self) -> Result<bool> {
        let mut state = self.state.lock().await;
        let Some(url) = state.ai_track.clone() else {
            return Ok(false)
        };
        self.start(&mut state, NowPlaying::AiTrack, &url).await?;
        Ok(true)
    }

    /// Returns false when the song does not exist or has no preview.
    pub async fn play_song(&self, index: usize) -> Result<bool> {
        let mut state = self.state.lock().await;
        let Some(url) = state.songs.get(index).and_then(|song| song.preview_url.clone()) else {
            return Ok(false)
        };
        state.current_song = index;
        self.start(&mut state, NowPlaying::Song(index), &url).await?;
        Ok(true)
    }

    /// Plays the next song with a preview, wrapping around the list.
    pub async fn next_track(&self) -> Result<Option<usize>> {
        let mut state = self.state.lock().await;
        let count = state.songs.len();
        let first = match state.now_playing {
            Some(NowPlaying::Song(index)) => index + 1,
            _ => 0,
        };

        let next = (0..count)
            .map(|offset| (first + offset) % count)
            .find(|index| state.songs[*index].preview_url.is_some());
        let Some(index) = next else {
            return Ok(None)
        };

        let url = state.songs[index].preview_url.clone().unwrap_or_default();
        state.current_song = index;
        self.start(&mut state, NowPlaying::Song(index), &url).await?;
        Ok(Some(index))
    }

    /// Returns whether audio is playing afterwards.
    pub async fn toggle_play_pause(&self) -> Result<bool> {
        let mut state = self.state.lock().await;
        if state.now_playing.is_none() {
            return Ok(false)
        }
        let mut playback = self.playback.lock().await;
        if state.is_playing {
            playback.pause();
            state.is_playing = false;
        } else {
            playback.play()?;
            state.is_playing = true;
        }
        Ok(state.is_playing)
    }

    pub async fn playback_ended(&self) {
        self.state.lock().await.is_playing = false;
    }

    /// External playlist for the current mood.
    pub async fn playlist_url(&self) -> Option<String> {
        let mood = self.state.lock().await.mood?;
        Some(self.tables.playlist(mood).to_owned())
    }

    pub async fn visible_songs(&self) -> Vec<Song> {
        self.state.lock().await.songs.iter().take(VISIBLE_SONGS).cloned().collect()
    }

    async fn start(&self, state: &mut PlayerState, target: NowPlaying, url: &str) -> Result<()> {
        let mut playback = self.playback.lock().await;
        playback.load(url);
        state.now_playing = Some(target);
        state.is_playing = false;
        playback.play()?;
        state.is_playing = true;
        info!(?target, url, "playing");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Load(String),
        Play,
        Pause,
    }

    #[derive(Clone, Default)]
    struct RecordingPlayback {
        events: Arc<StdMutex<Vec<Event>>>,
    }

    impl RecordingPlayback {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl PlaybackHandle for RecordingPlayback {
        fn load(&mut self, url: &str) {
            self.events.lock().unwrap().push(Event::Load(url.to_owned()));
        }
        fn play(&mut self) -> Result<()> {
            self.events.lock().unwrap().push(Event::Play);
            Ok(())
        }
        fn pause(&mut self) {
            self.events.lock().unwrap().push(Event::Pause);
        }
    }

    #[derive(Default)]
    struct FakeSource {
        fail_songs: bool,
        fail_ai: bool,
        slow_mood: Option<Mood>,
    }

    impl FakeSource {
        async fn maybe_wait(&self, mood: Mood) {
            if self.slow_mood == Some(mood) {
                sleep(Duration::from_millis(100)).await;
            }
        }
    }

    #[async_trait]
    impl MusicSource for FakeSource {
        async fn ai_track(&self, mood: Mood) -> Result<String> {
            self.maybe_wait(mood).await;
            if self.fail_ai {
                bail!("ai offline");
            }
            Ok(format!("ai://{}", mood))
        }

        async fn songs(&self, mood: Mood) -> Result<Vec<Song>> {
            self.maybe_wait(mood).await;
            if self.fail_songs {
                bail!("catalog offline");
            }
            Ok(vec![
                Song::with_preview("one", "a", &format!("song://{}/1", mood)),
                Song { preview_url: None, ..Song::with_preview("two", "b", "") },
                Song::with_preview("three", "c", &format!("song://{}/3", mood)),
                Song::with_preview("four", "d", &format!("song://{}/4", mood)),
            ])
        }
    }

    /// Source whose AI track can be switched off between loads.
    #[derive(Default)]
    struct SwitchableSource {
        fail_ai: AtomicBool,
    }

    #[async_trait]
    impl MusicSource for SwitchableSource {
        async fn ai_track(&self, mood: Mood) -> Result<String> {
            if self.fail_ai.load(Ordering::SeqCst) {
                bail!("ai offline");
            }
            Ok(format!("ai://{}", mood))
        }

        async fn songs(&self, mood: Mood) -> Result<Vec<Song>> {
            Ok(vec![Song::with_preview("one", "a", &format!("song://{}/1", mood))])
        }
    }

    fn player(source: FakeSource) -> (MusicPlayer<FakeSource, RecordingPlayback>, RecordingPlayback) {
        let playback = RecordingPlayback::default();
        let player = MusicPlayer::new(source, playback.clone(), Arc::new(StaticMusicTables::new()))
            .with_autoplay_delay(Duration::ZERO);
        (player, playback)
    }

    #[tokio::test]
    async fn mood_change_loads_and_autoplays_ai_track() {
        let (player, playback) = player(FakeSource::default());
        player.load_mood(Mood::Calm).await;

        let state = player.snapshot().await;
        assert_eq!(state.mood, Some(Mood::Calm));
        assert_eq!(state.ai_track.as_deref(), Some("ai://calm"));
        assert_eq!(state.songs.len(), 4);
        assert!(!state.loading_ai && !state.loading_songs);
        assert_eq!(state.now_playing, Some(NowPlaying::AiTrack));
        assert!(state.is_playing);
        assert_eq!(playback.events(), vec![Event::Load("ai://calm".to_owned()), Event::Play]);
        assert_eq!(player.visible_songs().await.len(), VISIBLE_SONGS);
    }

    #[tokio::test]
    async fn song_failure_does_not_block_ai_track() {
        let (player, _) = player(FakeSource { fail_songs: true, ..Default::default() });
        player.load_mood(Mood::Sad).await;

        let state = player.snapshot().await;
        assert!(state.songs.is_empty());
        assert!(!state.loading_songs);
        assert_eq!(state.now_playing, Some(NowPlaying::AiTrack));
    }

    #[tokio::test]
    async fn ai_failure_still_lists_songs() {
        let (player, playback) = player(FakeSource { fail_ai: true, ..Default::default() });
        player.load_mood(Mood::Happy).await;

        let state = player.snapshot().await;
        assert_eq!(state.ai_track, None);
        assert_eq!(state.songs.len(), 4);
        assert_eq!(state.now_playing, None);
        assert!(playback.events().is_empty());
        assert!(!player.play_ai_track().await.unwrap());
    }

    #[tokio::test]
    async fn failed_ai_fetch_stops_previous_mood_audio() {
        let playback = RecordingPlayback::default();
        let player = MusicPlayer::new(SwitchableSource::default(), playback.clone(), Arc::new(StaticMusicTables::new()))
            .with_autoplay_delay(Duration::ZERO);
        player.load_mood(Mood::Happy).await;
        assert_eq!(player.snapshot().await.now_playing, Some(NowPlaying::AiTrack));

        player.source.fail_ai.store(true, Ordering::SeqCst);
        player.load_mood(Mood::Sad).await;

        let state = player.snapshot().await;
        assert_eq!(state.mood, Some(Mood::Sad));
        assert_eq!(state.ai_track, None);
        assert_eq!(state.now_playing, None);
        assert!(!state.is_playing);
        assert_eq!(playback.events().last(), Some(&Event::Pause));
        assert!(!player.toggle_play_pause().await.unwrap());
    }

    #[tokio::test]
    async fn new_source_replaces_current_one() {
        let (player, playback) = player(FakeSource::default());
        player.load_mood(Mood::Happy).await;

        assert!(player.play_song(2).await.unwrap());
        assert!(!player.play_song(1).await.unwrap());
        assert!(!player.play_song(10).await.unwrap());

        let state = player.snapshot().await;
        assert_eq!(state.now_playing, Some(NowPlaying::Song(2)));
        assert_eq!(state.current_song, 2);
        assert_eq!(
            playback.events(),
            vec![
                Event::Load("ai://happy".to_owned()),
                Event::Play,
                Event::Load("song://happy/3".to_owned()),
                Event::Play,
            ]
        );
    }

    #[tokio::test]
    async fn toggle_pauses_and_resumes() {
        let (player, playback) = player(FakeSource::default());
        assert!(!player.toggle_play_pause().await.unwrap());

        player.load_mood(Mood::Calm).await;
        assert!(!player.toggle_play_pause().await.unwrap());
        assert!(player.toggle_play_pause().await.unwrap());
        assert_eq!(&playback.events()[2..], &[Event::Pause, Event::Play]);

        player.playback_ended().await;
        assert!(!player.snapshot().await.is_playing);
    }

    #[tokio::test]
    async fn next_track_skips_missing_previews_and_wraps() {
        let (player, _) = player(FakeSource::default());
        player.load_mood(Mood::Energetic).await;

        assert_eq!(player.next_track().await.unwrap(), Some(0));
        assert_eq!(player.next_track().await.unwrap(), Some(2));
        assert_eq!(player.next_track().await.unwrap(), Some(3));
        assert_eq!(player.next_track().await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn stale_mood_results_are_dropped() {
        let (player, playback) = player(FakeSource { slow_mood: Some(Mood::Sad), ..Default::default() });

        tokio::join!(
            player.load_mood(Mood::Sad),
            async {
                sleep(Duration::from_millis(20)).await;
                player.load_mood(Mood::Happy).await;
            }
        );

        let state = player.snapshot().await;
        assert_eq!(state.mood, Some(Mood::Happy));
        assert_eq!(state.ai_track.as_deref(), Some("ai://happy"));
        assert_eq!(state.songs[0].preview_url.as_deref(), Some("song://happy/1"));
        assert!(!playback.events().contains(&Event::Load("ai://sad".to_owned())));
    }

    #[tokio::test]
    async fn playlist_follows_mood() {
        let (player, _) = player(FakeSource::default());
        assert_eq!(player.playlist_url().await, None);

        player.load_mood(Mood::Sad).await;
        assert_eq!(
            player.playlist_url().await.as_deref(),
            Some("https://open.spotify.com/playlist/37i9dQZF1DX7qK8ma5wgG1")
        );
    }
}

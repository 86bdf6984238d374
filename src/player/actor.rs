use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::controller::PlaybackController;
use super::state::Direction;
use crate::audio::{AudioBackend, BackendEvent};

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Next,
    Previous,
    ToggleMute,
    Stop,
}

/// Cloneable sender side of the player's command channel.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    tx: mpsc::Sender<PlayerCommand>,
}

impl PlayerHandle {
    /// Returns `false` once the player has shut down.
    pub async fn send(&self, cmd: PlayerCommand) -> bool {
        if self.tx.send(cmd).await.is_err() {
            tracing::warn!(?cmd, "player has stopped, command dropped");
            return false;
        }
        true
    }

    /// For threads that live outside the tokio runtime (the hotkey listener).
    pub fn blocking_send(&self, cmd: PlayerCommand) -> bool {
        if self.tx.blocking_send(cmd).is_err() {
            tracing::warn!(?cmd, "player has stopped, command dropped");
            return false;
        }
        true
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

pub fn command_channel() -> (PlayerHandle, mpsc::Receiver<PlayerCommand>) {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    (PlayerHandle { tx }, rx)
}

/// Owns the controller and applies commands and backend events one at a time.
pub struct PlayerActor<B> {
    controller: PlaybackController<B>,
    rx_cmd: mpsc::Receiver<PlayerCommand>,
    rx_evt: mpsc::Receiver<BackendEvent>,
    poll_interval: Duration,
    events_closed: bool,
}

impl<B: AudioBackend> PlayerActor<B> {
    pub fn new(
        controller: PlaybackController<B>,
        rx_cmd: mpsc::Receiver<PlayerCommand>,
        rx_evt: mpsc::Receiver<BackendEvent>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            controller,
            rx_cmd,
            rx_evt,
            poll_interval,
            events_closed: false,
        }
    }

    /// Plays until stopped, then hands the controller back.
    pub async fn run(mut self) -> PlaybackController<B> {
        if !self.controller.start() {
            return self.controller;
        }

        let polling = self.controller.needs_polling();
        let mut poll_tick = tokio::time::interval(self.poll_interval);
        poll_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        poll_tick.tick().await;

        while self.controller.state().is_playing {
            select! {
                biased;
                maybe_cmd = self.rx_cmd.recv() => {
                    match maybe_cmd {
                        Some(cmd) => self.handle_command(cmd),
                        None => {
                            tracing::info!("every player handle dropped, stopping");
                            self.controller.stop();
                        }
                    }
                }
                maybe_evt = self.rx_evt.recv(), if !self.events_closed => {
                    match maybe_evt {
                        Some(evt) => self.handle_backend_event(evt),
                        None => {
                            self.events_closed = true;
                        }
                    }
                }
                _ = poll_tick.tick(), if polling => {
                    self.controller.poll_completion();
                }
            }
        }

        tracing::info!(
            index = self.controller.state().current_index,
            "playback session ended"
        );
        self.controller
    }

    fn handle_command(&mut self, cmd: PlayerCommand) {
        tracing::debug!(?cmd, "player command");
        match cmd {
            PlayerCommand::Next => self.controller.advance(Direction::Forward),
            PlayerCommand::Previous => self.controller.advance(Direction::Backward),
            PlayerCommand::ToggleMute => {
                self.controller.toggle_mute();
            }
            PlayerCommand::Stop => self.controller.stop(),
        }
    }

    fn handle_backend_event(&mut self, evt: BackendEvent) {
        match evt {
            BackendEvent::Ended { play_id } => self.controller.on_track_ended(play_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::player::testing::RecordingBackend;
    use crate::playlist::Playlist;

    fn controller(
        names: &[&str],
        backend: RecordingBackend,
    ) -> PlaybackController<RecordingBackend> {
        let playlist = Playlist::from_tracks(names.iter().map(PathBuf::from).collect());
        PlaybackController::new(playlist, 0.8, backend)
    }

    async fn wait_for_plays(probe: &RecordingBackend, n: usize) {
        let waited = tokio::time::timeout(Duration::from_secs(2), async {
            while probe.played().len() < n {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(waited.is_ok(), "expected {n} plays, got {:?}", probe.played());
    }

    #[tokio::test]
    async fn commands_and_track_end_drive_the_cursor() {
        let backend = RecordingBackend::new();
        let probe = backend.clone();
        let (handle, rx_cmd) = command_channel();
        let (tx_evt, rx_evt) = mpsc::channel(8);
        let actor = PlayerActor::new(
            controller(&["1.mp3", "2.mp3", "3.mp3"], backend),
            rx_cmd,
            rx_evt,
            Duration::from_secs(60),
        );
        let task = tokio::spawn(actor.run());

        wait_for_plays(&probe, 1).await;
        tx_evt
            .send(BackendEvent::Ended { play_id: 1 })
            .await
            .expect("send");
        wait_for_plays(&probe, 2).await;

        assert!(handle.send(PlayerCommand::Next).await);
        wait_for_plays(&probe, 3).await;
        assert!(handle.send(PlayerCommand::Stop).await);

        let c = task.await.expect("join");
        assert!(!c.state().is_playing);
        assert_eq!(c.state().current_index, 2);
        assert_eq!(
            probe.played(),
            vec![
                PathBuf::from("1.mp3"),
                PathBuf::from("2.mp3"),
                PathBuf::from("3.mp3")
            ]
        );
    }

    #[tokio::test]
    async fn mute_command_reaches_backend() {
        let backend = RecordingBackend::new();
        let (handle, rx_cmd) = command_channel();
        let (_tx_evt, rx_evt) = mpsc::channel(8);
        let actor = PlayerActor::new(
            controller(&["1.mp3"], backend),
            rx_cmd,
            rx_evt,
            Duration::from_secs(60),
        );
        let task = tokio::spawn(actor.run());

        handle.send(PlayerCommand::ToggleMute).await;
        handle.send(PlayerCommand::Stop).await;

        let c = task.await.expect("join");
        assert!(c.state().is_muted);
        assert_eq!(c.backend().volume(), 0.0);
    }

    #[tokio::test]
    async fn dropping_every_handle_ends_the_session() {
        let backend = RecordingBackend::new();
        let (handle, rx_cmd) = command_channel();
        let (_tx_evt, rx_evt) = mpsc::channel(8);
        let actor = PlayerActor::new(
            controller(&["1.mp3", "2.mp3"], backend),
            rx_cmd,
            rx_evt,
            Duration::from_secs(60),
        );
        drop(handle);

        let c = tokio::time::timeout(Duration::from_secs(2), actor.run())
            .await
            .expect("session should end");
        assert!(!c.state().is_playing);
    }

    #[tokio::test]
    async fn polled_backend_loops_through_playlist() {
        let backend = RecordingBackend::new().polled_instant_tracks();
        let probe = backend.clone();
        let (handle, rx_cmd) = command_channel();
        let (tx_evt, rx_evt) = mpsc::channel(8);
        drop(tx_evt);
        let actor = PlayerActor::new(
            controller(&["1.mp3", "2.mp3"], backend),
            rx_cmd,
            rx_evt,
            Duration::from_millis(10),
        );
        let task = tokio::spawn(actor.run());

        wait_for_plays(&probe, 4).await;
        handle.send(PlayerCommand::Stop).await;
        task.await.expect("join");

        let played = probe.played();
        assert_eq!(played[0], PathBuf::from("1.mp3"));
        assert_eq!(played[1], PathBuf::from("2.mp3"));
        assert_eq!(played[2], PathBuf::from("1.mp3"));
        assert_eq!(played[3], PathBuf::from("2.mp3"));
    }

    #[tokio::test]
    async fn empty_playlist_returns_immediately() {
        let backend = RecordingBackend::new();
        let probe = backend.clone();
        let (_handle, rx_cmd) = command_channel();
        let (_tx_evt, rx_evt) = mpsc::channel(8);
        let actor = PlayerActor::new(controller(&[], backend), rx_cmd, rx_evt, Duration::from_secs(1));

        let c = actor.run().await;
        assert!(!c.state().is_playing);
        assert!(probe.played().is_empty());
    }
}

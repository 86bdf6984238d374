use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tokio::sync::mpsc;

use super::{AudioBackend, BackendEvent};
use crate::error::AudioError;

struct ActiveSink {
    sink: Arc<Sink>,
    end_cancel: Arc<AtomicBool>,
}

/// Plays tracks on the default output device through `rodio`.
pub struct RodioBackend {
    mixer: Mixer,
    #[allow(dead_code)]
    stream: OutputStream,
    tx_evt: mpsc::Sender<BackendEvent>,
    current: Option<ActiveSink>,
    volume: f32,
}

impl RodioBackend {
    pub fn open(tx_evt: mpsc::Sender<BackendEvent>) -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::OutputStream(e.to_string()))?;
        let mixer = stream.mixer().clone();
        tracing::info!("audio output opened");

        Ok(Self {
            mixer,
            stream,
            tx_evt,
            current: None,
            volume: 1.0,
        })
    }

    fn stop_current(&mut self) {
        if let Some(cur) = self.current.take() {
            cur.end_cancel.store(true, Ordering::Relaxed);
            cur.sink.stop();
        }
    }

    /// Watches the sink on its own thread and reports a natural end.
    /// Setting `end_cancel` before stopping the sink suppresses the report.
    fn attach_sink(&mut self, sink: Arc<Sink>, play_id: u64) -> Result<(), AudioError> {
        let tx_end = self.tx_evt.clone();
        let cancel = Arc::new(AtomicBool::new(false));
        let sink_end = Arc::clone(&sink);
        let cancel_end = Arc::clone(&cancel);

        thread::Builder::new()
            .name(format!("audio-end-check-{play_id}"))
            .spawn(move || {
                let start = std::time::Instant::now();
                sink_end.sleep_until_end();
                let elapsed_ms = start.elapsed().as_millis();

                if cancel_end.load(Ordering::Relaxed) {
                    tracing::debug!(play_id, elapsed_ms, "end check cancelled");
                } else {
                    tracing::debug!(play_id, elapsed_ms, "track reached its end");
                    let _ = tx_end.blocking_send(BackendEvent::Ended { play_id });
                }
            })
            .map_err(AudioError::Spawn)?;

        self.current = Some(ActiveSink {
            sink,
            end_cancel: cancel,
        });
        Ok(())
    }
}

impl AudioBackend for RodioBackend {
    fn play(&mut self, track: &Path, play_id: u64) -> Result<(), AudioError> {
        self.stop_current();

        let sink = Arc::new(build_sink(&self.mixer, track)?);
        sink.set_volume(self.volume);
        sink.play();
        self.attach_sink(Arc::clone(&sink), play_id).inspect_err(|_| sink.stop())
    }

    fn stop(&mut self) {
        self.stop_current();
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(cur) = self.current.as_ref() {
            cur.sink.set_volume(volume);
        }
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_busy(&self) -> bool {
        self.current.as_ref().is_some_and(|cur| !cur.sink.empty())
    }
}

fn build_sink(mixer: &Mixer, path: &Path) -> Result<Sink, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let sink = Sink::connect_new(mixer);
    sink.append(decoder);
    Ok(sink)
}

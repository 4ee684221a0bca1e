use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::types::{EngineCmd, EngineEvent};

const IDLE_TICK: Duration = Duration::from_millis(200);

pub(super) fn spawn_engine_thread(
    rx: Receiver<EngineCmd>,
    events: Sender<EngineEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;
        let mut loaded: Option<PathBuf> = None;
        let mut paused = true;

        loop {
            match rx.recv_timeout(IDLE_TICK) {
                Ok(EngineCmd::Load { locator, generation }) => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    paused = true;
                    match open_sink(&stream, &locator) {
                        Ok(new_sink) => {
                            sink = Some(new_sink);
                            loaded = Some(locator);
                            let _ = events.send(EngineEvent::Ready { generation });
                        }
                        Err(reason) => {
                            loaded = None;
                            let _ = events.send(EngineEvent::Failed { generation, reason });
                        }
                    }
                }
                Ok(EngineCmd::Play) => {
                    if let Some(ref s) = sink {
                        s.play();
                        paused = false;
                    }
                }
                Ok(EngineCmd::Pause) => {
                    if let Some(ref s) = sink {
                        s.pause();
                        paused = true;
                    }
                }
                Ok(EngineCmd::Reset) => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    loaded = None;
                    paused = true;
                }
                Ok(EngineCmd::Quit) => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {
                    // Single-track repeat: when the current source drains while
                    // unpaused, reopen it from the start and keep going.
                    let drained = sink.as_ref().map(|s| s.empty()).unwrap_or(false);
                    if drained && !paused {
                        if let Some(ref locator) = loaded {
                            match open_sink(&stream, locator) {
                                Ok(new_sink) => {
                                    new_sink.play();
                                    sink = Some(new_sink);
                                }
                                Err(reason) => {
                                    // Source vanished mid-session; fall silent.
                                    tracing::warn!(
                                        reason = %reason,
                                        "failed to restart drained source"
                                    );
                                    sink = None;
                                    paused = true;
                                }
                            }
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Open and decode `locator` into a paused sink.
fn open_sink(stream: &OutputStream, locator: &Path) -> Result<Sink, String> {
    let file = File::open(locator).map_err(|e| e.to_string())?;
    let source = Decoder::new(BufReader::new(file)).map_err(|e| e.to_string())?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

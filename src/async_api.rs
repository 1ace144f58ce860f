use crate::export::{ExportOutcome, Exporter};
use crate::platform::DownloadSink;
use crate::{Error, Result, WallpaperConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Export(
        Box<dyn DownloadSink + Send>,
        oneshot::Sender<Result<ExportOutcome>>,
        Busy,
    ),
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly export handle backed by a dedicated worker thread.
///
/// The worker owns the `Exporter` and its random source and runs one export
/// at a time, in the order requests arrive, so exports never overlap and
/// never block the caller's executor. Clones share the same worker.
#[derive(Clone)]
pub struct WallpaperWorker {
    cmd_tx: Sender<Command>,
    in_flight: Arc<AtomicUsize>,
}

/// Marks an export as in flight until dropped.
///
/// Travels with the queued command, so the mark clears when the worker has
/// finished the job even if the requesting future was dropped meanwhile.
struct Busy(Arc<AtomicUsize>);

impl Busy {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Busy(counter.clone())
    }
}

impl Drop for Busy {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl WallpaperWorker {
    /// Create a worker (spawns a background thread that owns the exporter).
    pub async fn new(config: Option<WallpaperConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            let mut rng = config.rng();
            let exporter = match Exporter::new(config) {
                Ok(e) => e,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };

            let _ = init_tx.send(Ok(()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Export(mut sink, resp, busy) => {
                        let res = exporter.export(sink.as_mut(), &mut rng);
                        // Clear before replying so an awaiting caller sees idle
                        drop(busy);
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        init_rx.await.map_err(|_| Error::WorkerClosed)??;

        Ok(Self {
            cmd_tx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Whether any export requested through this worker is still running or queued
    pub fn is_rendering(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Render the high-resolution wallpaper and deliver it to `sink`.
    pub async fn export_high_res<S>(&self, sink: S) -> Result<ExportOutcome>
    where
        S: DownloadSink + Send + 'static,
    {
        let busy = Busy::enter(&self.in_flight);
        // Let the caller observe the busy state before the render starts
        tokio::task::yield_now().await;

        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Export(Box::new(sink), tx, busy))
            .map_err(|_| Error::WorkerClosed)?;
        rx.await.map_err(|_| Error::WorkerClosed)?
    }

    /// Stop the worker once queued exports have finished
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Close(tx))
            .map_err(|_| Error::WorkerClosed)?;
        rx.await.map_err(|_| Error::WorkerClosed)?
    }
}

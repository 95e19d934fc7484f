//! Transport abstraction for the live stream
//!
//! Pluggable transport layer: TCP against a real broker, in-memory for
//! tests. Frames use the fixed binary header from `shared::message`.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{Mutex, broadcast};
use uuid::Uuid;

use crate::stream::StreamError;
use shared::message::{Frame, FrameKind};

/// Transport abstraction for stream communication
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn read_frame(&self) -> Result<Frame, StreamError>;
    async fn write_frame(&self, frame: &Frame) -> Result<(), StreamError>;
    async fn close(&self) -> Result<(), StreamError>;
}

/// Where the stream client connects
#[derive(Debug, Clone)]
pub enum StreamEndpoint {
    /// TCP address of the broker (e.g., "127.0.0.1:8082")
    Tcp(String),
    /// In-process hub for tests
    Memory(MemoryHub),
}

impl StreamEndpoint {
    /// Open a fresh transport to this endpoint
    pub(crate) async fn open(&self) -> Result<Box<dyn Transport>, StreamError> {
        match self {
            StreamEndpoint::Tcp(addr) => Ok(Box::new(TcpTransport::connect(addr).await?)),
            StreamEndpoint::Memory(hub) => Ok(Box::new(hub.open()?)),
        }
    }
}

/// TCP Transport Implementation
#[derive(Debug, Clone)]
pub struct TcpTransport {
    reader: Arc<Mutex<OwnedReadHalf>>,
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

impl TcpTransport {
    pub async fn connect(addr: &str) -> Result<Self, StreamError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| StreamError::Connection(e.to_string()))?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: Arc::new(Mutex::new(reader)),
            writer: Arc::new(Mutex::new(writer)),
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read_frame(&self) -> Result<Frame, StreamError> {
        let mut reader = self.reader.lock().await;

        loop {
            // Read frame kind (1 byte)
            let mut kind_buf = [0u8; 1];
            reader.read_exact(&mut kind_buf).await.map_err(StreamError::Io)?;

            // Read frame ID (16 bytes)
            let mut uuid_buf = [0u8; 16];
            reader.read_exact(&mut uuid_buf).await.map_err(StreamError::Io)?;
            let frame_id = Uuid::from_bytes(uuid_buf);

            // Read payload length (4 bytes)
            let mut len_buf = [0u8; 4];
            reader.read_exact(&mut len_buf).await.map_err(StreamError::Io)?;
            let len = u32::from_le_bytes(len_buf) as usize;

            // Read payload
            let mut payload = vec![0u8; len];
            reader.read_exact(&mut payload).await.map_err(StreamError::Io)?;

            // An unknown kind only poisons this frame; the header told
            // us its length, so skip it and keep the connection.
            match FrameKind::try_from(kind_buf[0]) {
                Ok(kind) => {
                    return Ok(Frame {
                        frame_id,
                        kind,
                        payload,
                    });
                }
                Err(_) => {
                    tracing::warn!(kind = kind_buf[0], "skipping frame of unknown kind");
                    continue;
                }
            }
        }
    }

    async fn write_frame(&self, frame: &Frame) -> Result<(), StreamError> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(&frame.to_bytes())
            .await
            .map_err(StreamError::Io)?;
        Ok(())
    }

    async fn close(&self) -> Result<(), StreamError> {
        // Dropping the Arc references will eventually close the stream
        Ok(())
    }
}

/// In-process broker double for tests
///
/// Frames published on the hub reach every open transport. The hub can
/// refuse new connects and kill live connections to exercise the
/// reconnection path.
#[derive(Debug, Clone)]
pub struct MemoryHub {
    /// Broker -> client channel; replaced wholesale to kill connections
    inbound: Arc<StdMutex<broadcast::Sender<Frame>>>,
    /// Client -> broker channel (subscribe frames end up here)
    outbound: broadcast::Sender<Frame>,
    refuse: Arc<AtomicBool>,
}

impl MemoryHub {
    pub fn new() -> Self {
        let (inbound, _) = broadcast::channel(64);
        let (outbound, _) = broadcast::channel(64);
        Self {
            inbound: Arc::new(StdMutex::new(inbound)),
            outbound,
            refuse: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Push a frame to every currently connected transport
    pub fn publish(&self, frame: Frame) {
        let _ = self.inbound.lock().unwrap().send(frame);
    }

    /// Drop every live connection; open transports see a read error
    pub fn drop_connections(&self) {
        let (fresh, _) = broadcast::channel(64);
        *self.inbound.lock().unwrap() = fresh;
    }

    /// Refuse (or stop refusing) new connection attempts
    pub fn set_refuse(&self, refuse: bool) {
        self.refuse.store(refuse, Ordering::SeqCst);
    }

    /// Observe frames written by the client (e.g., subscriptions)
    pub fn outbound_frames(&self) -> broadcast::Receiver<Frame> {
        self.outbound.subscribe()
    }

    /// Open a transport against this hub
    pub fn open(&self) -> Result<MemoryTransport, StreamError> {
        if self.refuse.load(Ordering::SeqCst) {
            return Err(StreamError::Connection("connection refused".to_string()));
        }
        Ok(MemoryTransport {
            rx: Arc::new(Mutex::new(self.inbound.lock().unwrap().subscribe())),
            tx: self.outbound.clone(),
        })
    }
}

impl Default for MemoryHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Memory Transport Implementation (for in-process tests)
#[derive(Debug)]
pub struct MemoryTransport {
    /// Receiver for frames FROM the hub
    rx: Arc<Mutex<broadcast::Receiver<Frame>>>,
    /// Sender for frames TO the hub
    tx: broadcast::Sender<Frame>,
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn read_frame(&self) -> Result<Frame, StreamError> {
        let mut rx = self.rx.lock().await;
        loop {
            match rx.recv().await {
                Ok(frame) => return Ok(frame),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "memory transport lagged, frames lost");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    return Err(StreamError::Connection("stream closed".to_string()));
                }
            }
        }
    }

    async fn write_frame(&self, frame: &Frame) -> Result<(), StreamError> {
        // A hub with no inspector is fine; drop the frame silently
        let _ = self.tx.send(frame.clone());
        Ok(())
    }

    async fn close(&self) -> Result<(), StreamError> {
        Ok(())
    }
}

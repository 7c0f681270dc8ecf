//! Frame sinks for solution videos.

/// MP4 output through the system `ffmpeg` binary.
pub(crate) mod ffmpeg;
/// Sink contract and the in-memory sink.
pub(crate) mod sink;
/// Rendering an animation into a sink.
pub(crate) mod stream;

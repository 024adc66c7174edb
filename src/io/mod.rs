//! Audio I/O modules
//!
//! Raw PCM decoding for analysis buffers and WAV file access using hound.

pub mod pcm;
pub mod wav;

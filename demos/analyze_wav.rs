//! Example: Analyze a WAV file the way the training app polls audio
//!
//! Splits the file into 200 ms buffers and prints one JSON report per buffer.
//!
//! ```text
//! cargo run --example analyze_wav -- path/to/voice.wav
//! ```

use std::env;
use voxtune_dsp::io::wav::load_wav_pcm16;
use voxtune_dsp::{AnalysisConfig, VoiceAnalyzer};

/// Poll cadence of the training app
const POLL_MS: u32 = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: analyze_wav <file.wav>")?;

    let wav = load_wav_pcm16(&path)?;
    let config = AnalysisConfig::default().with_sample_rate(wav.sample_rate);
    let analyzer = VoiceAnalyzer::new(config)?;

    let bytes_per_poll = (wav.sample_rate * POLL_MS / 1000) as usize * 2;
    println!(
        "Analyzing {} ({} Hz, {} channel(s)) in {} ms buffers",
        path, wav.sample_rate, wav.source_channels, POLL_MS
    );

    for (index, buffer) in wav.pcm.chunks(bytes_per_poll.max(2)).enumerate() {
        let report = analyzer.analyze(buffer);
        println!(
            "[{:>6} ms] {}",
            index as u32 * POLL_MS,
            serde_json::to_string(&report)?
        );
    }

    Ok(())
}

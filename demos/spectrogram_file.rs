//! Example: Convert a single WAV file into a spectrogram sequence
//!
//! Usage:
//!   cargo run --example spectrogram_file -- <file.wav>

use wav_spectro::get_spectrograms_sequence;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: spectrogram_file <file.wav>")?;

    let sequence = get_spectrograms_sequence(&path)?;

    let peak = sequence.as_array().iter().copied().fold(0.0f32, f32::max);
    println!("Spectrogram sequence for {}:", path);
    println!("  Shape: {:?}", sequence.shape());
    println!("  Frames: {}", sequence.len());
    println!("  Peak magnitude: {:.4}", peak);

    Ok(())
}

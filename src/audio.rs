//! Completion chime: a short bell-like tone synthesized on the default
//! output device. Playback is fire-and-forget; every failure is logged and
//! swallowed so the countdown transition is never affected.

use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::f32::consts::TAU;
use std::thread;
use std::time::Duration;

/// Pitch ramps 880 Hz -> 440 Hz over the chime duration
const START_HZ: f32 = 880.0;
const END_HZ: f32 = 440.0;

/// Gain envelope decays from moderate to near-silent
const START_GAIN: f32 = 0.3;
const END_GAIN: f32 = 0.01;

const CHIME_SECS: f32 = 1.5;

/// Probe the default output device ahead of the first chime so device
/// problems surface in the log at start time, not at expiry. Safe to call
/// more than once.
pub fn warmup() {
    match cpal::default_host().default_output_device() {
        Some(device) => {
            let name = device.name().unwrap_or_else(|_| "unknown".to_string());
            log::debug!("audio output device: {}", name);
        }
        None => log::warn!("no audio output device; completion chime disabled"),
    }
}

/// Play the chime on a detached thread
pub fn play_chime() {
    thread::spawn(|| {
        if let Err(e) = play_blocking() {
            log::warn!("chime playback failed: {:#}", e);
        }
    });
}

fn play_blocking() -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output device available"))?;
    let config = device.default_output_config()?;

    match config.sample_format() {
        cpal::SampleFormat::F32 => run_stream::<f32>(&device, &config.into()),
        cpal::SampleFormat::I16 => run_stream::<i16>(&device, &config.into()),
        cpal::SampleFormat::U16 => run_stream::<u16>(&device, &config.into()),
        format => Err(anyhow!("unsupported sample format {:?}", format)),
    }
}

/// Build the output stream, play for the chime duration, then drop it.
/// The stream handle is not Send on every backend, so the whole lifecycle
/// stays on the calling (detached) thread.
fn run_stream<T>(device: &cpal::Device, config: &cpal::StreamConfig) -> Result<()>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let sample_rate = config.sample_rate.0 as f32;
    let channels = config.channels as usize;

    let mut clock = 0f32;
    let mut phase = 0f32;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let value = T::from_sample(next_sample(&mut clock, &mut phase, sample_rate));
                for sample in frame.iter_mut() {
                    *sample = value;
                }
            }
        },
        |err| log::warn!("audio stream error: {}", err),
        None,
    )?;
    stream.play()?;

    // Hold the stream alive until the tone has fully decayed
    thread::sleep(Duration::from_millis((CHIME_SECS * 1000.0) as u64 + 100));
    Ok(())
}

/// Next mono sample: sine oscillator with exponential pitch and gain ramps,
/// silent once the chime duration has elapsed.
fn next_sample(clock: &mut f32, phase: &mut f32, sample_rate: f32) -> f32 {
    let t = *clock;
    if t >= CHIME_SECS {
        return 0.0;
    }

    let ratio = t / CHIME_SECS;
    let freq = START_HZ * (END_HZ / START_HZ).powf(ratio);
    let gain = START_GAIN * (END_GAIN / START_GAIN).powf(ratio);

    *phase = (*phase + TAU * freq / sample_rate) % TAU;
    *clock += 1.0 / sample_rate;

    gain * phase.sin()
}

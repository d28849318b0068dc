use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample, Stream, StreamConfig};

/// The beeper: a single output stream carrying a 440 Hz sine, built once
/// at startup and left paused. `start`/`stop` are idempotent, so the run
/// loop can sync the tone to the sound timer every frame without churn.
pub struct Sound {
    stream: Stream,
    playing: bool,
}

impl Sound {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no audio output device available")?;
        let supported = device
            .supported_output_configs()
            .context("querying audio output configs")?
            .next()
            .context("no supported audio output config")?
            .with_max_sample_rate();
        let format = supported.sample_format();
        let config: StreamConfig = supported.into();

        let stream = match format {
            cpal::SampleFormat::I8 => Self::build::<i8>(&device, &config),
            cpal::SampleFormat::I16 => Self::build::<i16>(&device, &config),
            cpal::SampleFormat::I32 => Self::build::<i32>(&device, &config),
            cpal::SampleFormat::I64 => Self::build::<i64>(&device, &config),
            cpal::SampleFormat::U8 => Self::build::<u8>(&device, &config),
            cpal::SampleFormat::U16 => Self::build::<u16>(&device, &config),
            cpal::SampleFormat::U32 => Self::build::<u32>(&device, &config),
            cpal::SampleFormat::U64 => Self::build::<u64>(&device, &config),
            cpal::SampleFormat::F32 => Self::build::<f32>(&device, &config),
            cpal::SampleFormat::F64 => Self::build::<f64>(&device, &config),
            other => return Err(anyhow!("unsupported sample format '{other}'")),
        }?;
        stream.pause().context("priming the audio stream")?;

        Ok(Self {
            stream,
            playing: false,
        })
    }

    fn build<T>(device: &cpal::Device, config: &StreamConfig) -> Result<Stream>
    where
        T: SizedSample + FromSample<f32>,
    {
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;

        let mut sample_clock = 0f32;
        let mut next_value = move || {
            sample_clock = (sample_clock + 1.0) % sample_rate;
            (sample_clock * 440.0 * 2.0 * std::f32::consts::PI / sample_rate).sin()
        };

        let err_fn = |err| log::error!("audio stream error: {err}");

        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    Self::write_data(data, channels, &mut next_value)
                },
                err_fn,
                None,
            )
            .context("building the audio stream")?;
        Ok(stream)
    }

    fn write_data<T>(output: &mut [T], channels: usize, next_sample: &mut dyn FnMut() -> f32)
    where
        T: Sample + FromSample<f32>,
    {
        for frame in output.chunks_mut(channels) {
            let value: T = T::from_sample(next_sample());
            for sample in frame.iter_mut() {
                *sample = value;
            }
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if !self.playing {
            self.stream.play().context("starting the tone")?;
            self.playing = true;
        }
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        if self.playing {
            self.stream.pause().context("stopping the tone")?;
            self.playing = false;
        }
        Ok(())
    }
}

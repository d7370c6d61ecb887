use crate::constants::*;
use crate::sim::constants::{EXHALE_VOLUME, LIGHT_VOLUME, SMOKE_ACTIVE_VOLUME};
use crate::sim::{Cue, CueCommand};
use fnv::FnvHashMap;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Filter and envelope shaping the shared noise into one cue. Loops use the
/// filter only; one-shots also apply the envelope.
struct Voicing {
    kind: web::BiquadFilterType,
    frequency_hz: f32,
    q: Option<f32>,
    peak: f32,
    rise_sec: f64,
    duration_sec: f64,
}

fn voicing(cue: Cue) -> Voicing {
    match cue {
        Cue::Light => Voicing {
            kind: web::BiquadFilterType::Highpass,
            frequency_hz: LIGHT_HIGHPASS_HZ,
            q: None,
            peak: LIGHT_VOLUME,
            rise_sec: 0.01,
            duration_sec: LIGHT_DURATION_SEC,
        },
        Cue::Smoke => Voicing {
            kind: web::BiquadFilterType::Lowpass,
            frequency_hz: SMOKE_LOWPASS_HZ,
            q: None,
            peak: SMOKE_ACTIVE_VOLUME,
            rise_sec: 0.05,
            duration_sec: LIGHT_DURATION_SEC,
        },
        Cue::Exhale => Voicing {
            kind: web::BiquadFilterType::Bandpass,
            frequency_hz: EXHALE_BANDPASS_HZ,
            q: Some(0.7),
            peak: EXHALE_VOLUME,
            rise_sec: EXHALE_RISE_SEC,
            duration_sec: EXHALE_DURATION_SEC,
        },
    }
}

struct LoopVoice {
    source: web::AudioBufferSourceNode,
    gain: web::GainNode,
}

/// Synthesized sound cues on a single AudioContext.
///
/// Every operation is fire-and-forget: failures are logged and the burn model
/// carries on without sound.
pub struct CuePlayer {
    ctx: web::AudioContext,
    master: web::GainNode,
    noise: web::AudioBuffer,
    loops: FnvHashMap<Cue, LoopVoice>,
    one_shots: FnvHashMap<Cue, web::AudioBufferSourceNode>,
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_filter(
    ctx: &web::AudioContext,
    kind: web::BiquadFilterType,
    frequency_hz: f32,
) -> Result<web::BiquadFilterNode, ()> {
    let filter = web::BiquadFilterNode::new(ctx).map_err(|e| {
        log::error!("[audio] BiquadFilterNode error: {:?}", e);
    })?;
    filter.set_type(kind);
    filter.frequency().set_value(frequency_hz);
    Ok(filter)
}

// Mono white noise shared by every cue
fn build_noise_buffer(ctx: &web::AudioContext) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let len = (sr * NOISE_BUFFER_SEC) as u32;
    let buffer = ctx
        .create_buffer(1, len, sr)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // xorshift32 keeps the noise deterministic
    let mut seed: u32 = 0x2545_F491;
    let mut samples: Vec<f32> = vec![0.0; len as usize];
    for s in samples.iter_mut() {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        *s = (seed as f32 / u32::MAX as f32) * 2.0 - 1.0;
    }
    buffer
        .copy_to_channel(&mut samples, 0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(buffer)
}

impl CuePlayer {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")
            .map_err(|_| anyhow::anyhow!("master gain"))?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let noise = build_noise_buffer(&ctx)?;
        Ok(Self {
            ctx,
            master,
            noise,
            loops: FnvHashMap::default(),
            one_shots: FnvHashMap::default(),
        })
    }

    /// Browsers keep the context suspended until a user gesture; call this
    /// from inside one. A rejection is logged and otherwise ignored.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Running {
            return;
        }
        match self.ctx.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] resume failed: {:?}", e),
        }
    }

    pub fn execute(&mut self, command: CueCommand) {
        match command {
            CueCommand::PlayOnce(cue) => self.play_once(cue),
            CueCommand::PlayLoop { cue, volume, delay } => {
                self.play_loop(cue, volume, delay.as_secs_f64())
            }
            CueCommand::SetVolume { cue, volume } => self.set_volume(cue, volume),
            CueCommand::Stop(cue) => self.stop(cue),
        }
    }

    pub fn play_once(&mut self, cue: Cue) {
        self.stop(cue);
        match self.one_shot(&voicing(cue)) {
            Ok(source) => {
                self.one_shots.insert(cue, source);
            }
            Err(_) => log::warn!("[audio] {:?} cue skipped", cue),
        }
    }

    pub fn play_loop(&mut self, cue: Cue, volume: f32, delay_sec: f64) {
        self.stop(cue);
        let voice = match self.build_loop(cue, volume) {
            Ok(v) => v,
            Err(_) => {
                log::warn!("[audio] {:?} loop skipped", cue);
                return;
            }
        };
        let t0 = self.ctx.current_time() + delay_sec;
        if let Err(e) = voice.source.start_with_when(t0) {
            log::error!("[audio] {:?} loop start error: {:?}", cue, e);
            return;
        }
        self.loops.insert(cue, voice);
    }

    pub fn set_volume(&mut self, cue: Cue, volume: f32) {
        if let Some(voice) = self.loops.get(&cue) {
            let now = self.ctx.current_time();
            let gain = voice.gain.gain();
            _ = gain.cancel_scheduled_values(now);
            _ = gain.set_target_at_time(volume, now, VOLUME_GLIDE_TAU_SEC);
        }
    }

    pub fn stop(&mut self, cue: Cue) {
        if let Some(voice) = self.loops.remove(&cue) {
            // throws if the delayed start never happened; nothing to undo then
            _ = voice.source.stop();
            _ = voice.gain.disconnect();
        }
        if let Some(source) = self.one_shots.remove(&cue) {
            _ = source.stop();
        }
    }

    fn noise_source(&self, looping: bool) -> Result<web::AudioBufferSourceNode, ()> {
        let source = web::AudioBufferSourceNode::new(&self.ctx).map_err(|e| {
            log::error!("[audio] AudioBufferSourceNode error: {:?}", e);
        })?;
        source.set_buffer(Some(&self.noise));
        source.set_loop(looping);
        Ok(source)
    }

    fn build_loop(&self, cue: Cue, volume: f32) -> Result<LoopVoice, ()> {
        let source = self.noise_source(true)?;
        let tone = self.tone(&voicing(cue))?;
        let gain = create_gain(&self.ctx, volume, "Loop")?;
        _ = source.connect_with_audio_node(&tone);
        _ = tone.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.master);
        Ok(LoopVoice { source, gain })
    }

    fn tone(&self, voicing: &Voicing) -> Result<web::BiquadFilterNode, ()> {
        let filter = create_filter(&self.ctx, voicing.kind, voicing.frequency_hz)?;
        if let Some(q) = voicing.q {
            filter.q().set_value(q);
        }
        Ok(filter)
    }

    // Short envelope over filtered noise, routed to the master bus
    fn one_shot(&self, voicing: &Voicing) -> Result<web::AudioBufferSourceNode, ()> {
        let source = self.noise_source(false)?;
        let filter = self.tone(voicing)?;
        let env = create_gain(&self.ctx, 0.0, "Envelope")?;
        let t0 = self.ctx.current_time() + 0.005;
        let end = t0 + voicing.duration_sec;
        _ = env.gain().set_value_at_time(0.0, t0);
        _ = env
            .gain()
            .linear_ramp_to_value_at_time(voicing.peak, t0 + voicing.rise_sec);
        _ = env.gain().linear_ramp_to_value_at_time(0.0, end);
        _ = source.connect_with_audio_node(&filter);
        _ = filter.connect_with_audio_node(&env);
        _ = env.connect_with_audio_node(&self.master);
        source.start_with_when(t0).map_err(|e| {
            log::error!("[audio] one-shot start error: {:?}", e);
        })?;
        _ = source.stop_with_when(end + 0.05);
        Ok(source)
    }
}

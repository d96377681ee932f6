//! Best-effort audio cues synthesized with the Web Audio API. When audio is
//! unavailable the cues degrade to silence, never to an error.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AudioContext, OscillatorType};

const TICK_FREQ_HZ: f32 = 880.0;
const TICK_SECONDS: f64 = 0.05;
const TICK_GAIN: f32 = 0.12;

const CUE_HIGH_HZ: f32 = 196.0;
const CUE_LOW_HZ: f32 = 131.0;
const CUE_GAIN: f32 = 0.2;

/// One short blip per countdown second.
pub fn tick() {
    play_notes(&[(TICK_FREQ_HZ, 0.0, TICK_SECONDS)], TICK_GAIN);
}

/// Two-note knock fired once when a round is decided.
pub fn decision_cue() {
    play_notes(
        &[(CUE_HIGH_HZ, 0.0, 0.09), (CUE_LOW_HZ, 0.12, 0.18)],
        CUE_GAIN,
    );
}

fn play_notes(notes: &[(f32, f64, f64)], gain_level: f32) {
    let Ok(ctx) = AudioContext::new() else {
        return;
    };
    let Ok(gain) = ctx.create_gain() else {
        return;
    };
    gain.gain().set_value(gain_level);
    if gain.connect_with_audio_node(&ctx.destination()).is_err() {
        return;
    }

    let now = ctx.current_time();
    let mut end = now;
    for &(freq, offset, length) in notes {
        let Ok(osc) = ctx.create_oscillator() else {
            continue;
        };
        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(freq);
        if osc.connect_with_audio_node(&gain).is_err() {
            continue;
        }
        let _ = osc.start_with_when(now + offset);
        let _ = osc.stop_with_when(now + offset + length);
        end = end.max(now + offset + length);
    }

    // Release the context once the notes have rung out.
    let close_ctx = ctx.clone();
    let close_cb = Closure::once(move || {
        let _ = close_ctx.close();
    });
    let delay_ms = ((end - now) * 1_000.0) as i32 + 100;
    let _ = crate::dom::window().set_timeout_with_callback_and_timeout_and_arguments_0(
        close_cb.as_ref().unchecked_ref(),
        delay_ms,
    );
    close_cb.forget();
}

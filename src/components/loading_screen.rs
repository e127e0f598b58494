use leptos::prelude::*;

use crate::lifecycle::{SplashPhase, SplashSequencer, SplashTiming};
use crate::models::Brand;

const PARTICLES: usize = 10;

/// Splash overlay shown before the page mounts.
///
/// Runs `on_complete` exactly once, when the sequence reaches `Hidden`.
#[component]
pub fn LoadingScreen(
    brand: &'static Brand,
    timing: SplashTiming,
    #[prop(into)] on_complete: Callback<()>,
) -> impl IntoView {
    let sequencer = StoredValue::new(SplashSequencer::new(timing));
    let progress = RwSignal::new(0u8);
    let phase = RwSignal::new(SplashPhase::Showing);

    #[cfg(feature = "hydrate")]
    drive(sequencer, progress, phase, on_complete);
    #[cfg(not(feature = "hydrate"))]
    let _ = (sequencer, on_complete);

    let fade_style = format!("transition-duration: {}ms", timing.fade_ms());

    view! {
        <div
            class="loading-screen"
            class:fading=move || phase.get() != SplashPhase::Showing
            style=fade_style
            role="status"
            aria-live="polite"
        >
            <div class="loading-particles">
                {(0..PARTICLES).map(|_| view! { <div class="loading-particle"></div> }).collect_view()}
            </div>

            <div class="loading-content">
                <div class="loading-spinner">
                    <div class="spinner-ring"></div>
                    <div class="spinner-arc"></div>
                    <div class="spinner-glow"></div>
                    <span class="spinner-mark">{brand.mark.as_str()}</span>
                </div>

                <h1 class="loading-title">{spell(&brand.name)}</h1>
                <p class="loading-subtitle">{spell(&brand.location)}</p>

                <div class="loading-bar">
                    <div
                        class="loading-bar-fill"
                        style=move || format!("width: {}%", progress.get())
                    ></div>
                </div>
            </div>
        </div>
    }
}

/// One span per character so each letter can be animated on its own.
fn spell(text: &str) -> impl IntoView {
    text.chars()
        .map(|ch| {
            let ch = if ch == ' ' { '\u{00A0}' } else { ch };
            view! { <span class="loading-char">{ch.to_string()}</span> }
        })
        .collect_view()
}

#[cfg(feature = "hydrate")]
fn drive(
    sequencer: StoredValue<SplashSequencer>,
    progress: RwSignal<u8>,
    phase: RwSignal<SplashPhase>,
    on_complete: Callback<()>,
) {
    use std::time::Duration;

    let tick_ms = sequencer.with_value(|s| s.timing().tick_ms());
    let interval = StoredValue::new(None::<IntervalHandle>);
    // Intervals are throttled in background tabs; advance by wall-clock time.
    let started_at = js_sys::Date::now();

    let tick = move || {
        let since_start = (js_sys::Date::now() - started_at).max(0.0) as u32;
        let Some(step) =
            sequencer.try_update_value(|s| s.advance(since_start.saturating_sub(s.elapsed_ms())))
        else {
            return;
        };
        progress.try_set(step.progress);
        let Some(next) = step.transition else {
            return;
        };
        phase.try_set(next);
        if next == SplashPhase::Hidden {
            if let Some(handle) = interval.try_get_value().flatten() {
                handle.clear();
            }
            log::debug!(
                "splash sequence complete after {}ms",
                sequencer.with_value(|s| s.elapsed_ms())
            );
            on_complete.run(());
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(u64::from(tick_ms))) {
        Ok(handle) => interval.set_value(Some(handle)),
        Err(err) => {
            log::warn!("cannot schedule splash timer, skipping splash: {err:?}");
            let finished = sequencer
                .try_update_value(|s| s.finish())
                .filter(|step| step.transition == Some(SplashPhase::Hidden));
            if let Some(step) = finished {
                progress.set(step.progress);
                phase.set(SplashPhase::Hidden);
                on_complete.run(());
            }
        }
    }

    on_cleanup(move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
        sequencer.try_update_value(|s| s.cancel());
    });
}

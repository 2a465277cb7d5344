//! Welcome Animation
//!
//! Splash screen that reveals itself in timed stages before the shell mounts.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::railway_graphics::{ParticleBackground, RailwayTrack};
use crate::config::use_config;

pub const STAGE_LOGO: u8 = 1;
pub const STAGE_SUBTITLE: u8 = 2;
pub const STAGE_FEATURES: u8 = 3;
pub const STAGE_READY: u8 = 4;

/// `(stage, delay_ms)` pairs; stage numbers start at 1
///
/// With no delays configured the splash completes immediately.
pub fn stage_schedule(delays_ms: &[u32]) -> Vec<(u8, u32)> {
    if delays_ms.is_empty() {
        return vec![(STAGE_READY, 0)];
    }
    delays_ms
        .iter()
        .enumerate()
        .map(|(i, delay)| ((i + 1) as u8, *delay))
        .collect()
}

/// CSS class for a block that appears once `stage` reaches `threshold`
pub fn reveal_class(stage: u8, threshold: u8) -> &'static str {
    if stage >= threshold {
        "reveal shown"
    } else {
        "reveal"
    }
}

const FEATURES: [(&str, &str, &str); 3] = [
    ("▣", "QR Tracking", "feature-icon green"),
    ("⚡", "AI Insights", "feature-icon purple"),
    ("🚆", "Live Monitoring", "feature-icon orange"),
];

#[component]
pub fn WelcomeAnimation(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let config = use_config();
    let (stage, set_stage) = signal(0u8);

    let schedule = stage_schedule(&config.splash_stages_ms);
    let final_stage = schedule.last().map(|(s, _)| *s).unwrap_or(STAGE_READY);
    for (target, delay) in schedule {
        Timeout::new(delay, move || {
            // Unmounted before the timer fired
            if set_stage.try_set(target).is_some() {
                return;
            }
            if target == final_stage {
                log::debug!("[WELCOME] splash complete");
                on_complete.run(());
            }
        })
        .forget();
    }

    view! {
        <div class="welcome-screen">
            <ParticleBackground count=50 />

            <div class="welcome-center">
                <div class=move || reveal_class(stage.get(), STAGE_LOGO)>
                    <div class="welcome-logo">
                        <span class="welcome-logo-icon">"🚆"</span>
                        <span class="welcome-logo-badge">"▣"</span>
                    </div>
                    <h1 class="welcome-title">"QRail"</h1>
                </div>

                <div class=move || reveal_class(stage.get(), STAGE_SUBTITLE)>
                    <p class="welcome-subtitle">"Smart Railway Management System"</p>
                </div>

                <div class=move || reveal_class(stage.get(), STAGE_FEATURES)>
                    <div class="welcome-features">
                        {FEATURES.iter().map(|(icon, label, class)| view! {
                            <div class="welcome-feature">
                                <div class={*class}>{*icon}</div>
                                <p>{*label}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class=move || reveal_class(stage.get(), STAGE_READY)>
                    <div class="loading-dots">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                    <p class="welcome-status">"Initializing System..."</p>
                </div>
            </div>

            <div class="welcome-track">
                <RailwayTrack />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_default_schedule() {
        let schedule = stage_schedule(&AppConfig::default().splash_stages_ms);
        assert_eq!(schedule, vec![(1, 500), (2, 1500), (3, 2500), (4, 3500)]);
    }

    #[test]
    fn test_schedule_is_ordered() {
        let schedule = stage_schedule(&AppConfig::default().splash_stages_ms);
        for pair in schedule.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
        assert_eq!(schedule.last().map(|s| s.0), Some(STAGE_READY));
    }

    #[test]
    fn test_empty_schedule_completes_immediately() {
        assert_eq!(stage_schedule(&[]), vec![(STAGE_READY, 0)]);
    }

    #[test]
    fn test_reveal_thresholds() {
        assert_eq!(reveal_class(0, STAGE_LOGO), "reveal");
        assert_eq!(reveal_class(1, STAGE_LOGO), "reveal shown");
        assert_eq!(reveal_class(1, STAGE_SUBTITLE), "reveal");
        assert_eq!(reveal_class(3, STAGE_FEATURES), "reveal shown");
        assert_eq!(reveal_class(4, STAGE_READY), "reveal shown");
        assert_eq!(reveal_class(4, STAGE_LOGO), "reveal shown");
    }
}

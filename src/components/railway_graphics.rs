//! Railway Graphics
//!
//! Decorative SVG backdrop: track, train, floating QR tiles and particles.

use leptos::prelude::*;

/// Spread point `i` across a 100x100 percent grid without randomness
pub fn scatter(i: usize) -> (f64, f64) {
    let n = i as f64;
    ((n * 61.803).rem_euclid(100.0), (n * 38.197 + 17.0).rem_euclid(100.0))
}

/// Pulsing dots at fixed pseudo-random positions
#[component]
pub fn ParticleBackground(#[prop(default = 20)] count: usize) -> impl IntoView {
    view! {
        <div class="particle-background">
            {(0..count).map(|i| {
                let (left, top) = scatter(i);
                let style = format!(
                    "left: {:.1}%; top: {:.1}%; animation-delay: {:.1}s; animation-duration: {:.1}s",
                    left,
                    top,
                    (i % 7) as f64 * 0.4,
                    2.0 + (i % 5) as f64 * 0.4,
                );
                view! { <div class="particle" style=style></div> }
            }).collect_view()}
        </div>
    }
}

/// Cells of the small QR glyph on floating tiles
const TILE_CELLS: &[(u32, u32)] = &[
    (2, 2), (6, 2), (12, 2), (16, 2),
    (2, 6), (16, 6),
    (2, 12), (6, 12), (12, 12), (16, 12),
    (2, 16), (6, 16), (12, 16), (16, 16),
];

#[component]
pub fn FloatingQrCodes() -> impl IntoView {
    view! {
        <div class="floating-qr-codes">
            {(0..6usize).map(|i| {
                let style = format!(
                    "left: {}%; top: {}%; animation-delay: {:.1}s; animation-duration: {:.1}s",
                    10 + i * 15,
                    20 + (i % 3) * 20,
                    i as f64 * 0.5,
                    3.0 + i as f64 * 0.5,
                );
                view! {
                    <div class="floating-qr" style=style>
                        <svg width="20" height="20" viewBox="0 0 20 20" fill="white">
                            {TILE_CELLS.iter().map(|(x, y)| view! {
                                <rect x={*x} y={*y} width="2" height="2" />
                            }).collect_view()}
                        </svg>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Straight track with sleepers, rails and signal poles
#[component]
pub fn RailwayTrack() -> impl IntoView {
    view! {
        <svg class="railway-track" width="100%" height="200" viewBox="0 0 800 200" xmlns="http://www.w3.org/2000/svg">
            <rect x="0" y="80" width="800" height="40" fill="#64748b" rx="20" />
            {(0..20u32).map(|i| {
                let style = format!("animation-delay: {:.1}s", i as f64 * 0.1);
                view! {
                    <rect class="sleeper" x={i * 40 + 10} y="70" width="30" height="60" fill="#8b5a3c" rx="4" style=style />
                }
            }).collect_view()}
            <rect x="0" y="75" width="800" height="8" fill="#cbd5e1" rx="4" />
            <rect x="0" y="117" width="800" height="8" fill="#cbd5e1" rx="4" />
            <line x1="0" y1="40" x2="800" y2="40" stroke="#3b82f6" stroke-width="2" opacity="0.7" />
            <line x1="0" y1="160" x2="800" y2="160" stroke="#3b82f6" stroke-width="2" opacity="0.7" />
            {(0..5u32).map(|i| {
                let x = i * 160 + 100;
                view! {
                    <g>
                        <rect x=x y="20" width="4" height="50" fill="#374151" />
                        <circle class="pulse" cx={x + 2} cy="25" r="6" fill="#ef4444" />
                        <circle class="pulse delayed" cx={x + 2} cy="35" r="6" fill="#22c55e" />
                    </g>
                }
            }).collect_view()}
        </svg>
    }
}

#[component]
pub fn Train() -> impl IntoView {
    let windows = [30u32, 60, 90, 120, 150];
    let wheels = [40u32, 70, 130, 160];
    view! {
        <svg class="train" width="200" height="120" viewBox="0 0 200 120" xmlns="http://www.w3.org/2000/svg">
            <rect x="20" y="30" width="160" height="40" fill="#3b82f6" rx="8" />
            <polygon points="180,30 200,50 180,70" fill="#3b82f6" />
            {windows.into_iter().map(|x| view! {
                <rect x=x y="35" width="20" height="15" fill="#bfdbfe" rx="2" />
            }).collect_view()}
            {wheels.into_iter().map(|cx| view! {
                <circle cx=cx cy="75" r="8" fill="#374151" />
                <circle cx=cx cy="75" r="4" fill="#6b7280" />
            }).collect_view()}
            <circle class="pulse" cx="190" cy="50" r="6" fill="#fbbf24" />
            <rect x="40" y="55" width="12" height="12" fill="#ffffff" rx="1" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_stays_in_bounds() {
        for i in 0..200 {
            let (x, y) = scatter(i);
            assert!((0.0..100.0).contains(&x), "x={}", x);
            assert!((0.0..100.0).contains(&y), "y={}", y);
        }
    }

    #[test]
    fn test_scatter_spreads_points() {
        assert_ne!(scatter(1), scatter(2));
        assert_ne!(scatter(0).0, scatter(1).0);
    }
}

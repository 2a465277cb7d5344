//! Status Badge Component

use leptos::prelude::*;

use crate::models::FittingStatus;

/// Colored badge for a fitting status
#[component]
pub fn StatusBadge(
    status: FittingStatus,
    /// Render "NEEDS INSPECTION" instead of "needs inspection"
    #[prop(optional)]
    upper: bool,
) -> impl IntoView {
    let text = if upper {
        status.display().to_uppercase()
    } else {
        status.display()
    };
    view! { <span class=status.badge_class()>{text}</span> }
}

//! Card Components
//!
//! Titled panel and headline stat tile shared by the pages.

use leptos::prelude::*;

/// "12547" -> "12,547"
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Panel with a header line and optional description
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: Option<String>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("card {}", class)>
            <header class="card-header">
                <h3 class="card-title">{title}</h3>
                {description.map(|d| view! { <p class="card-description">{d}</p> })}
            </header>
            <div class="card-content">{children()}</div>
        </section>
    }
}

/// Headline number with caption
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] caption: String,
    icon: &'static str,
    /// Accent class, e.g. "tone-red"
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card stat-card {}", tone)>
            <div class="stat-header">
                <span class="stat-title">{title}</span>
                <span class="stat-icon">{icon}</span>
            </div>
            <div class="stat-value">{value}</div>
            <p class="stat-caption">{caption}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(89), "89");
        assert_eq!(format_thousands(156), "156");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12547), "12,547");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}

//! Page implementations for the dashboard CLI.
//!
//! Each page owns its own state exclusively: a [`crate::PageState`] plus any
//! view state (sort order, search term). Pages never share mutable data.

pub mod add_player;
pub mod player_stats;
pub mod players_info;
pub mod stadiums;
pub mod teams;

/// Resolve the backend base URL: explicit flag > env var > default.
pub fn resolve_api_url(api_url: Option<String>) -> String {
    api_url
        .or_else(|| {
            std::env::var(crate::API_URL_ENV_VAR)
                .ok()
                .filter(|v| !v.is_empty())
        })
        .unwrap_or_else(|| crate::DEFAULT_API_URL.to_string())
}

/// Group digits in threes: `19812` → `"19,812"`.
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

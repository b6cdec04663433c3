//! Profile picture with an initial-letter fallback.

#[cfg(test)]
#[path = "user_avatar_test.rs"]
mod user_avatar_test;

use leptos::prelude::*;

/// Uppercase first letter of `name`, or `?` when there is none.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn UserAvatar(name: String, image: Option<String>, #[prop(default = 40)] size: u32) -> impl IntoView {
    let px = size.to_string();
    let style = format!("width:{size}px;height:{size}px;font-size:{}px", size * 2 / 5);
    match image.filter(|src| !src.is_empty()) {
        Some(src) => view! {
            <img class="avatar" src=src alt="profile" width=px.clone() height=px/>
        }
        .into_any(),
        None => view! {
            <div class="avatar avatar--initial" style=style aria-hidden="true">
                {avatar_initial(&name)}
            </div>
        }
        .into_any(),
    }
}

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Page not found."</h2>
                <a class="auth-link" href="/">"Back to the console"</a>
            </div>
        </div>
    }
}

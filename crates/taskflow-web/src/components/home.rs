//! Landing page for unauthenticated visitors.

use leptos::prelude::*;

use crate::components::ui::RouteLink;
use crate::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing-nav">
                <span class="logo">"TaskFlow"</span>
                <div class="landing-nav-links">
                    <RouteLink to=Route::Login class="nav-link">"Log in"</RouteLink>
                    <RouteLink to=Route::Register class="nav-link nav-link-primary">
                        "Get Started"
                    </RouteLink>
                </div>
            </nav>
            <main class="hero">
                <h1>"Collaborate without limits."</h1>
                <p>
                    "The all-in-one workspace for teams to track, manage, and \
                     collaborate on tasks in real-time."
                </p>
                <div class="hero-actions">
                    <RouteLink to=Route::Register class="button button-primary">
                        "Start Free Trial"
                    </RouteLink>
                    <RouteLink to=Route::Login class="button button-outline">
                        "Sign In"
                    </RouteLink>
                </div>
            </main>
        </div>
    }
}

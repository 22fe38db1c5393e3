use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A desktop-style portfolio with draggable windows." />

        <Router>
            <Routes>
                <Route path="" view=DesktopEntry />
                <Route path="/*any" view=DesktopEntry />
            </Routes>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = platform_host_web::build_host_services();

    view! {
        <DesktopProvider host_services=host_services>
            <DesktopShell />
        </DesktopProvider>
    }
}

// Chess Vision — browser frontend (Leptos 0.8, CSR)

use leptos::prelude::*;

mod fetch;
mod pages;
mod session;

/// The two flow stages. Navigation between them is an in-app page switch;
/// the analysis payload travels through session storage, not through props,
/// so the results view can stand alone after a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Upload,
    Results,
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let page = RwSignal::new(Page::Upload);
    provide_context(page);

    view! {
        {move || match page.get() {
            Page::Upload => view! { <pages::upload::UploadPage /> }.into_any(),
            Page::Results => view! { <pages::results::ResultsPage /> }.into_any(),
        }}
    }
}

use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!("Starting todoboard (web)"));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::BoardProvider {
            ui::views::BoardView {}
        }
    }
}

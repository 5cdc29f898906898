mod demos;
mod landing;

use dioxus::prelude::*;
use demos::{FlatDemo, PairDemo, TiltDemo};
use landing::Landing;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/flat")]
    FlatDemo {},
    #[route("/tilt")]
    TiltDemo {},
    #[route("/pair")]
    PairDemo {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    let scene_css = demos::SCENE_CSS;

    rsx! {
        style { "{scene_css}" }
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

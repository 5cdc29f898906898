use dioxus::prelude::*;
use pointer_parallax::{Mode, ParallaxOptions};

use super::use_parallax;

#[component]
pub fn TiltDemo() -> Element {
    use_parallax(
        "#tilt-card",
        ParallaxOptions::new()
            .with_mode(Mode::Tilt)
            .with_degrees(20.0)
            .with_vendors(["webkit", ""]),
    );

    rsx! {
        div {
            class: "stage",
            div {
                id: "tilt-card",
                class: "layer card",
                "Tilt me"
            }
            div { class: "caption", "mode: 3D, degrees: 20" }
        }
    }
}

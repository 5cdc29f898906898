use dioxus::prelude::*;
use pointer_parallax::ParallaxOptions;

use super::use_parallax;

#[component]
pub fn FlatDemo() -> Element {
    use_parallax("#flat-scene", ParallaxOptions::new());

    rsx! {
        div {
            class: "stage",
            div {
                id: "flat-scene",
                class: "layer layer-front",
            }
            div { class: "caption", "mode: 2D, speed: 100, reverse" }
        }
    }
}

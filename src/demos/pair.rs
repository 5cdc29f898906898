use dioxus::prelude::*;
use pointer_parallax::ParallaxOptions;

use super::use_parallax;

// Back layer drifts toward the pointer, front layer away from it, at
// different speeds. Both share the page's single resize listener.
#[component]
pub fn PairDemo() -> Element {
    use_parallax(
        "#pair-back",
        ParallaxOptions::new()
            .with_speed(30.0)
            .with_reverse(false)
            .with_vendors(["webkit", ""]),
    );
    use_parallax(
        "#pair-front",
        ParallaxOptions::new()
            .with_speed(160.0)
            .with_hardware(false)
            .with_vendors(["webkit", ""]),
    );

    rsx! {
        div {
            class: "stage",
            div { id: "pair-back", class: "layer layer-back" }
            div { id: "pair-front", class: "layer layer-front" }
            div { class: "caption", "back: speed 30, toward  |  front: speed 160, away, no 3d" }
        }
    }
}

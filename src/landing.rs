use dioxus::prelude::*;
use crate::Route;

struct DemoInfo {
    name: &'static str,
    desc: &'static str,
    route: Route,
}

const DEMOS: &[DemoInfo] = &[
    DemoInfo { name: "Flat", desc: "2D translation away from the pointer", route: Route::FlatDemo {} },
    DemoInfo { name: "Tilt", desc: "3D rotation toward the pointer",       route: Route::TiltDemo {} },
    DemoInfo { name: "Pair", desc: "Two layers, one resize listener",      route: Route::PairDemo {} },
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Pointer Parallax"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Move the pointer anywhere on the page and the scene follows. Pick a demo."
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px;",
                for demo in DEMOS {
                    Link {
                        to: demo.route.clone(),
                        style: "display: block; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; text-decoration: none;",
                        h3 {
                            style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                            "{demo.name}"
                        }
                        p {
                            style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                            "{demo.desc}"
                        }
                    }
                }
            }
        }
    }
}

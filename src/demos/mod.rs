//! Demo pages - each mounts one or more effects on styled layers
//!
//! Effects overwrite the target's whole inline style, so layers are styled
//! through classes in `SCENE_CSS` and never inline.

mod flat;
mod pair;
mod tilt;

pub use flat::FlatDemo;
pub use pair::PairDemo;
pub use tilt::TiltDemo;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use pointer_parallax::web::{self, WebHost};
use pointer_parallax::{Parallax, ParallaxOptions};

pub const SCENE_CSS: &str = r#"
.stage { position: fixed; inset: 0; overflow: hidden; background: #0f0f1a; display: flex; align-items: center; justify-content: center; perspective: 800px; font-family: system-ui, sans-serif; }
.layer { position: absolute; border-radius: 16px; box-sizing: content-box; }
.layer-back { width: 70vw; height: 70vh; background: radial-gradient(circle at 30% 30%, #4c1d95, #1a1a2e 70%); }
.layer-front { width: 240px; height: 160px; background: linear-gradient(135deg, #3b82f6, #6366f1); box-shadow: 0 12px 40px rgba(0,0,0,0.5); }
.card { width: 360px; height: 220px; background: linear-gradient(135deg, #22c55e, #16a34a); box-shadow: 0 12px 40px rgba(0,0,0,0.5); color: white; display: flex; align-items: center; justify-content: center; font-size: 20px; font-weight: 600; }
.caption { position: absolute; bottom: 24px; color: #6b7280; font-size: 13px; font-family: monospace; }
"#;

/// Attach an effect once the page is mounted; dispose it on unmount
pub fn use_parallax(selector: &'static str, options: ParallaxOptions) {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<Parallax<WebHost>>)));

    let mounted = slot.clone();
    use_effect(move || {
        if mounted.borrow().is_some() {
            return;
        }
        match web::attach(selector, options.clone()) {
            Ok(effect) => *mounted.borrow_mut() = Some(effect),
            Err(err) => tracing::warn!(%err, selector, "parallax not attached"),
        }
    });

    use_drop(move || {
        if let Some(effect) = slot.borrow_mut().take() {
            effect.dispose();
        }
    });
}

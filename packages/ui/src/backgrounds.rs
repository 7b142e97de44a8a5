//! Decorative canvas backgrounds.
//!
//! Both components render a bare `<canvas>` and, in the browser, start a frame
//! loop tied to the component's lifetime. The particle state comes from
//! [`content::effects`]; nothing here reacts to the rest of the page.

use content::config::EffectsConfig;
use dioxus::prelude::*;

use crate::site::use_site_config;

#[cfg(target_arch = "wasm32")]
use canvas::start;

#[derive(Clone, Copy, Debug)]
enum Kind {
    Glyphs,
    Icons,
}

/// Only the browser has a canvas to draw on.
#[cfg(not(target_arch = "wasm32"))]
fn start(_evt: MountedEvent, _kind: Kind, _effects: EffectsConfig) {}

/// Falling code glyphs, used behind the hero.
#[component]
pub fn TechBackground(#[props(default = "tech-background".to_string())] class: String) -> Element {
    let effects = use_site_config().effects;

    rsx! {
        canvas {
            class: "{class}",
            "aria-hidden": "true",
            onmounted: move |evt: MountedEvent| start(evt, Kind::Glyphs, effects.clone()),
        }
    }
}

/// Slowly drifting technology labels, used behind the services grid.
#[component]
pub fn TechIconsBackground(
    #[props(default = "tech-icons-background".to_string())] class: String,
) -> Element {
    let effects = use_site_config().effects;

    rsx! {
        canvas {
            class: "{class}",
            "aria-hidden": "true",
            onmounted: move |evt: MountedEvent| start(evt, Kind::Icons, effects.clone()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod canvas {
    use content::config::EffectsConfig;
    use content::effects::{GlyphRain, IconRain};
    use dioxus::prelude::*;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::Kind;
    use crate::clock::{now_ms, sleep_ms};

    const GLYPH_COLOR: &str = "rgba(56, 189, 248, 0.55)";
    const ICON_COLOR: &str = "rgb(148, 163, 184)";

    pub(super) fn start(evt: MountedEvent, kind: Kind, effects: EffectsConfig) {
        let canvas = evt
            .data()
            .downcast::<web_sys::Element>()
            .cloned()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            tracing::debug!("Background canvas not available");
            return;
        };
        spawn(async move {
            let result = match kind {
                Kind::Glyphs => run_glyphs(canvas, effects).await,
                Kind::Icons => run_icons(canvas, effects).await,
            };
            if let Err(e) = result {
                tracing::warn!("Background animation stopped: {:?}", e);
            }
        });
    }

    fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    /// Match the backing store to the displayed size. Returns the new size
    /// when it changed.
    fn fit(canvas: &HtmlCanvasElement) -> Option<(f64, f64)> {
        let w = canvas.client_width().max(0) as u32;
        let h = canvas.client_height().max(0) as u32;
        if canvas.width() == w && canvas.height() == h {
            return None;
        }
        canvas.set_width(w);
        canvas.set_height(h);
        Some((w as f64, h as f64))
    }

    async fn run_glyphs(canvas: HtmlCanvasElement, effects: EffectsConfig) -> Result<(), JsValue> {
        let ctx = context(&canvas)?;
        let (w, h) = fit(&canvas).unwrap_or((canvas.width() as f64, canvas.height() as f64));
        let mut rain = GlyphRain::new(w, h, effects.glyph_size_px, now_ms());
        let font = format!("{}px ui-monospace, monospace", rain.glyph_size());

        loop {
            if let Some((w, h)) = fit(&canvas) {
                rain.resize(w, h);
            }
            let (w, h) = (canvas.width() as f64, canvas.height() as f64);

            // Fade what is already drawn towards transparent to leave trails.
            ctx.set_global_composite_operation("destination-out")?;
            ctx.set_fill_style_str("rgba(0, 0, 0, 0.08)");
            ctx.fill_rect(0.0, 0.0, w, h);
            ctx.set_global_composite_operation("source-over")?;

            ctx.set_font(&font);
            ctx.set_fill_style_str(GLYPH_COLOR);
            for glyph in rain.step() {
                ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y)?;
            }

            sleep_ms(effects.frame_ms).await;
        }
    }

    async fn run_icons(canvas: HtmlCanvasElement, effects: EffectsConfig) -> Result<(), JsValue> {
        let ctx = context(&canvas)?;
        let (w, h) = fit(&canvas).unwrap_or((canvas.width() as f64, canvas.height() as f64));
        let mut rain = IconRain::new(w, h, effects.icon_count, now_ms());
        let mut last = now_ms();

        loop {
            if let Some((w, h)) = fit(&canvas) {
                rain.resize(w, h);
            }
            let now = now_ms();
            rain.step(now.saturating_sub(last) as f64);
            last = now;

            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            ctx.set_fill_style_str(ICON_COLOR);
            for p in rain.particles() {
                ctx.set_global_alpha(p.opacity);
                ctx.set_font(&format!("600 {:.0}px ui-monospace, monospace", p.size));
                ctx.fill_text(p.label, p.x, p.y)?;
            }
            ctx.set_global_alpha(1.0);

            sleep_ms(effects.frame_ms).await;
        }
    }
}

//! Scroll-triggered reveal wrapper.
//!
//! Each [`Reveal`] owns its own `IntersectionObserver`. The first time the
//! element intersects the viewport the latch flips, the observer disconnects,
//! and the `reveal--visible` class drives a one-shot CSS transition.

use content::RevealLatch;
use dioxus::prelude::*;

use crate::site::use_site_config;

#[component]
pub fn Reveal(
    /// Extra classes on the wrapper.
    #[props(default)]
    class: String,
    /// Override the configured intersection threshold.
    #[props(default)]
    threshold: Option<f64>,
    /// Stagger the transition.
    #[props(default)]
    delay_ms: u32,
    children: Element,
) -> Element {
    let config = use_site_config();
    let latch = use_signal(|| RevealLatch::new(threshold.unwrap_or(config.reveal.threshold)));
    let visible = latch().is_revealed();

    rsx! {
        div {
            class: if visible { "reveal reveal--visible {class}" } else { "reveal {class}" },
            style: "transition-delay: {delay_ms}ms",
            onmounted: move |evt: MountedEvent| observe(evt, latch),
            {children}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn observe(_evt: MountedEvent, mut latch: Signal<RevealLatch>) {
    // No viewport to observe: show immediately.
    latch.write().observe(true);
}

#[cfg(target_arch = "wasm32")]
fn observe(evt: MountedEvent, mut latch: Signal<RevealLatch>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    if !latch.peek().is_armed() {
        return;
    }
    let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
        latch.write().observe(true);
        return;
    };

    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let mut tx = Some(tx);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .any(|e| e.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if hit {
                observer.disconnect();
                if let Some(tx) = tx.take() {
                    let _ = tx.send(());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(latch.peek().threshold()));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                latch.write().observe(true);
                return;
            }
        };
    observer.observe(&element);

    // Dropping the guard (reveal or unmount) disconnects before the closure goes away.
    let guard = ObserverGuard {
        observer,
        _callback: callback,
    };
    spawn(async move {
        let fired = rx.await.is_ok();
        drop(guard);
        if fired {
            latch.write().observe(true);
        }
    });
}

#[cfg(target_arch = "wasm32")]
struct ObserverGuard {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

use js_sys::{Array, Reflect};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("IntersectionObserver is not available in this browser")]
    Unsupported,
    #[error("failed to set up IntersectionObserver: {0}")]
    Setup(String),
}

/// What to do after a visibility callback has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveFlow {
    Continue,
    Stop,
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches how much of one element is inside the viewport.
///
/// Disconnects on drop, so holding it in component state ties the
/// observation to the component's lifetime.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl VisibilityObserver {
    /// Starts observing `target`. `on_change` gets the visible fraction each
    /// time it crosses `threshold` and may return `ObserveFlow::Stop` to end
    /// observation from inside the callback.
    pub fn observe<F>(target: &Element, threshold: f64, mut on_change: F) -> Result<Self, ObserverError>
    where
        F: FnMut(f64) -> ObserveFlow + 'static,
    {
        if !is_supported() {
            return Err(ObserverError::Unsupported);
        }

        let callback: EntryCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let fraction = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                if on_change(fraction) == ObserveFlow::Stop {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| ObserverError::Setup(describe(&err)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn is_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

use crate::config::FrameRange;
use crate::error::WidgetError;
use crate::player::IconAnimator;
use js_sys::{Array, Function, Object, Reflect};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element};

/// Global installed by the lottie-web bundle.
const LOTTIE_GLOBAL: &str = "lottie";

/// A lottie-web animation rendered as SVG inside a button.
pub struct LottieIcon {
    animation: JsValue,
}

impl LottieIcon {
    pub fn load(container: &Element, path: &str, name: &str) -> Result<Self, WidgetError> {
        let window = window().ok_or(WidgetError::NoDocument)?;
        let lottie = Reflect::get(&window, &JsValue::from_str(LOTTIE_GLOBAL))
            .ok()
            .filter(|value| value.is_object())
            .ok_or(WidgetError::AnimationLibraryMissing(LOTTIE_GLOBAL))?;
        let load_animation = method(&lottie, "loadAnimation")?;

        let params = Object::new();
        set_param(&params, "container", container.as_ref())?;
        set_param(&params, "path", &JsValue::from_str(path))?;
        set_param(&params, "renderer", &JsValue::from_str("svg"))?;
        set_param(&params, "loop", &JsValue::FALSE)?;
        set_param(&params, "autoplay", &JsValue::FALSE)?;
        set_param(&params, "name", &JsValue::from_str(name))?;

        let animation = load_animation
            .call1(&lottie, &params)
            .map_err(|err| js_failure("loadAnimation", err))?;
        Ok(Self { animation })
    }

    fn invoke(&self, name: &'static str, args: &Array) -> Result<(), WidgetError> {
        method(&self.animation, name)?
            .apply(&self.animation, args)
            .map(|_| ())
            .map_err(|err| js_failure(name, err))
    }
}

impl IconAnimator for LottieIcon {
    fn to_frame(&mut self, frame: u32) {
        let args = Array::of2(&JsValue::from(frame), &JsValue::TRUE);
        if let Err(err) = self.invoke("goToAndStop", &args) {
            warn!(%err, "icon frame seek failed");
        }
    }

    fn play_range(&mut self, range: FrameRange) {
        let segment = Array::of2(&JsValue::from(range.start), &JsValue::from(range.end));
        // `true` starts the segment immediately instead of queueing it.
        let args = Array::of2(&segment, &JsValue::TRUE);
        if let Err(err) = self.invoke("playSegments", &args) {
            warn!(%err, "icon segment playback failed");
        }
    }
}

fn method(target: &JsValue, name: &'static str) -> Result<Function, WidgetError> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| WidgetError::Animation {
            method: name,
            message: "not a function".to_string(),
        })
}

fn set_param(params: &Object, key: &str, value: &JsValue) -> Result<(), WidgetError> {
    Reflect::set(params, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| js_failure("loadAnimation", err))
}

fn js_failure(method: &'static str, err: JsValue) -> WidgetError {
    WidgetError::Animation {
        method,
        message: format!("{err:?}"),
    }
}

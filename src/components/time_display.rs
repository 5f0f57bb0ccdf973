use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::util::{format_full, format_hour_bucket};

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[function_component(TimeDisplay)]
pub fn time_display() -> Html {
    let now = use_state(now_secs);
    // Seconds interval
    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let tick = Closure::wrap(Box::new(move || now.set(now_secs())) as Box<dyn FnMut()>);
            let handle = web_sys::window().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .ok()
            });
            move || {
                if let (Some(win), Some(id)) = (web_sys::window(), handle) {
                    win.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }
    let row_style = "display:flex; justify-content:space-between; gap:16px;";
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:6px; font-size:14px; font-variant-numeric:tabular-nums;">
        <div style={row_style}><span style="opacity:0.7;">{"Local time"}</span><span>{ format_full(*now) }</span></div>
        <div style={row_style}><span style="opacity:0.7;">{"Hour bucket"}</span><span>{ format_hour_bucket(*now) }</span></div>
    </div>}
}

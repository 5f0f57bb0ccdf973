use yew::prelude::*;

use crate::browser::Timeout;
use crate::model::{Toast, ToastAction, ToastBody, ToastLevel, ToastPosition, ToastQueue};

fn accent(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Error => "#f85149",
        ToastLevel::Warning => "#d29922",
        ToastLevel::Success => "#3fb950",
        ToastLevel::Info => "#58a6ff",
        ToastLevel::Notice => "#a371f7",
    }
}

fn stack_style(position: ToastPosition) -> &'static str {
    match position {
        ToastPosition::TopRight => {
            "position:fixed; top:12px; right:12px; display:flex; flex-direction:column; gap:8px; z-index:100; max-width:360px;"
        }
        ToastPosition::TopCenter => {
            "position:fixed; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; gap:8px; z-index:100; width:min(92vw, 420px);"
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss timer, cleared if the toast is closed by hand first
    {
        let id = props.toast.id;
        let auto_close = props.toast.request.options.auto_close;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timer = auto_close.and_then(|ms| {
                // dismiss off the timer callback: unmounting drops the timer
                Timeout::new(ms, move || {
                    wasm_bindgen_futures::spawn_local(async move { on_dismiss.emit(id) })
                })
                .map_err(|e| log::warn!("toast timer not set: {e}"))
                .ok()
            });
            move || drop(timer)
        });
    }
    let close_cb = {
        let cb = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_| cb.emit(id))
    };
    let req = &props.toast.request;
    let body = match &req.body {
        ToastBody::Text(text) => html! { <span>{ text.clone() }</span> },
        ToastBody::Html(markup) => Html::from_html_unchecked(AttrValue::from(markup.clone())),
    };
    html! {
        <div role="status" style={format!("background:#161b22; border:1px solid #30363d; border-left:4px solid {}; border-radius:8px; padding:8px 12px; display:flex; gap:10px; align-items:flex-start; font-size:13px; line-height:1.4; box-shadow:0 6px 18px rgba(0,0,0,0.45);", accent(req.level))}>
            <div style="flex:1; word-break:break-word;">{ body }</div>
            <button onclick={close_cb} style="padding:0 6px; background:none; border:none; color:#8b949e; cursor:pointer;">{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastHostProps {
    pub queue: UseReducerHandle<ToastQueue>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let on_dismiss = {
        let queue = props.queue.clone();
        Callback::from(move |id: u64| queue.dispatch(ToastAction::Dismiss(id)))
    };
    let stack = |position: ToastPosition| {
        let items: Html = props
            .queue
            .at(position)
            .map(|t| html! { <ToastItem key={t.id} toast={t.clone()} on_dismiss={on_dismiss.clone()} /> })
            .collect();
        html! { <div style={stack_style(position)}>{ items }</div> }
    };
    let clear_all = if props.queue.toasts.len() > 1 {
        let queue = props.queue.clone();
        let onclick = Callback::from(move |_| queue.dispatch(ToastAction::Clear));
        html! { <button {onclick} style="position:fixed; bottom:12px; right:12px; z-index:100; font-size:12px;">{"Dismiss all"}</button> }
    } else {
        html! {}
    };
    html! {<>
        { clear_all }
        { stack(ToastPosition::TopRight) }
        { stack(ToastPosition::TopCenter) }
    </>}
}

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::app::ConsoleContext;
use crate::browser::download_text_as_file;
use crate::clipboard::{BrowserClipboard, copy};
use crate::error::ConsoleError;
use crate::state::navigator::open_page;
use crate::util::{remove_trailing_slash, verify_json};

#[derive(Properties, PartialEq, Clone)]
pub struct ToolsPanelProps {
    #[prop_or("https://docs.example.com/".to_string())]
    pub docs_url: String,
    #[prop_or("export.txt".to_string())]
    pub export_name: String,
}

#[function_component]
pub fn ToolsPanel(props: &ToolsPanelProps) -> Html {
    let input_ref = use_node_ref();
    let Some(ctx) = use_context::<ConsoleContext>() else {
        return html! {};
    };
    let read_input = {
        let input_ref = input_ref.clone();
        move || {
            input_ref
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default()
        }
    };

    let check_cb = {
        let notifier = ctx.notifier.clone();
        let read_input = read_input.clone();
        Callback::from(move |_| {
            if verify_json(&read_input()) {
                notifier.success("Valid JSON");
            } else {
                notifier.warning("Not valid JSON");
            }
        })
    };
    let copy_cb = {
        let notifier = ctx.notifier.clone();
        let read_input = read_input.clone();
        Callback::from(move |_| {
            let notifier = notifier.clone();
            let text = read_input();
            wasm_bindgen_futures::spawn_local(async move {
                if copy(&BrowserClipboard, &text).await {
                    notifier.success("Copied to clipboard");
                } else {
                    notifier.error(ConsoleError::generic("could not copy to clipboard"));
                }
            });
        })
    };
    let download_cb = {
        let notifier = ctx.notifier.clone();
        let read_input = read_input.clone();
        let filename = props.export_name.clone();
        Callback::from(move |_| {
            if let Err(e) = download_text_as_file(&read_input(), &filename) {
                notifier.error(ConsoleError::generic(e.to_string()));
            }
        })
    };
    let docs_cb = {
        let nav = ctx.nav.clone();
        let url = props.docs_url.clone();
        Callback::from(move |_| open_page(nav.as_ref(), remove_trailing_slash(&url)))
    };
    // Preview how request failures are reported
    let preview = |status: u16| {
        let notifier = ctx.notifier.clone();
        Callback::from(move |_: MouseEvent| {
            notifier.error(ConsoleError::http(
                Some(status),
                format!("Request failed with status code {status}"),
            ))
        })
    };
    let notice_cb = {
        let notifier = ctx.notifier.clone();
        let read_input = read_input.clone();
        Callback::from(move |_| notifier.notice(read_input(), true))
    };

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px;">
        <textarea ref={input_ref} rows="6" placeholder="Paste text or JSON" style="width:100%; font-family:monospace; font-size:12px; background:#0d1117; color:#c9d1d9; border:1px solid #30363d; border-radius:6px;"></textarea>
        <div style="display:flex; gap:6px; flex-wrap:wrap;">
            <button onclick={check_cb}>{"Check JSON"}</button>
            <button onclick={copy_cb}>{"Copy"}</button>
            <button onclick={download_cb}>{"Download"}</button>
            <button onclick={notice_cb}>{"Show as notice"}</button>
            <button onclick={docs_cb}>{"Docs"}</button>
        </div>
        <div style="display:flex; gap:6px; flex-wrap:wrap; align-items:center; font-size:12px;">
            <span style="opacity:0.7;">{"Preview error:"}</span>
            <button onclick={preview(404)}>{"404"}</button>
            <button onclick={preview(405)}>{"405"}</button>
            <button onclick={preview(429)}>{"429"}</button>
            <button onclick={preview(500)}>{"500"}</button>
        </div>
        <div style="font-size:11px; opacity:0.7;">{"Notice content is rendered as markup without escaping."}</div>
    </div>}
}

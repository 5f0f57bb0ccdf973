use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WelcomePromptProps {
    pub show: bool,
    pub system_name: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(WelcomePrompt)]
pub fn welcome_prompt(props: &WelcomePromptProps) -> Html {
    if !props.show {
        return html! {};
    }
    let dismiss_btn = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:#161b22; border:2px solid #30363d; padding:24px 32px; border-radius:14px; max-width:480px; width:90%; font-size:14px; line-height:1.4;">
                <h2 style="margin:0 0 12px 0; font-size:20px; color:#58a6ff; text-align:center;">{ format!("Welcome to {}", props.system_name) }</h2>
                <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                    <li>{"Timestamps are shown in your browser's local timezone."}</li>
                    <li>{"Use the tools panel to validate JSON, copy values and export text files."}</li>
                    <li>{"An expired session sends you back to the login page."}</li>
                </ul>
                <div style="display:flex; justify-content:center;">
                    <button onclick={dismiss_btn}>{"Got it"}</button>
                </div>
                <div style="margin-top:12px; font-size:11px; opacity:0.6; text-align:center;">{"This message is shown only once."}</div>
            </div>
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub system_name: String,
    /// Operator-configured markup, rendered verbatim.
    pub html: Option<String>,
}

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    let content = match &props.html {
        Some(markup) => Html::from_html_unchecked(AttrValue::from(markup.clone())),
        None => html! { <span>{ format!("{} admin console", props.system_name) }</span> },
    };
    html! {<footer style="padding:10px 16px; font-size:12px; opacity:0.7; text-align:center; border-top:1px solid #30363d;">
        { content }
    </footer>}
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderBarProps {
    pub system_name: String,
    pub logo: String,
    pub username: Option<String>,
    pub is_admin: bool,
    pub is_root: bool,
}

#[function_component]
pub fn HeaderBar(props: &HeaderBarProps) -> Html {
    let badge_style = "font-size:11px; font-weight:600; padding:2px 8px; border-radius:10px;";
    let role_badge = if props.is_root {
        html! { <span style={format!("{} background:#a371f7; color:#0d1117;", badge_style)}>{"Root"}</span> }
    } else if props.is_admin {
        html! { <span style={format!("{} background:#58a6ff; color:#0d1117;", badge_style)}>{"Admin"}</span> }
    } else {
        html! {}
    };
    html! {
        <header style="display:flex; align-items:center; gap:10px; padding:10px 16px; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d;">
            <img src={props.logo.clone()} alt="logo" style="width:28px; height:28px; border-radius:6px;" />
            <span style="font-size:18px; font-weight:600; flex:1;">{ props.system_name.clone() }</span>
            { role_badge }
            <span style="font-size:13px; opacity:0.8;">{ props.username.clone().unwrap_or_else(|| "Not signed in".to_string()) }</span>
        </header>
    }
}

use std::rc::Rc;

use super::{
    footer::Footer, header_bar::HeaderBar, time_display::TimeDisplay, toast_host::ToastHost,
    tools_panel::ToolsPanel, welcome_prompt::WelcomePrompt,
};
use crate::model::{ToastAction, ToastQueue, ToastRequest};
use crate::notify::{Notifier, ToastSink};
use crate::state::{
    BrowserNavigator, ConsoleConfig, DeviceClass, KeyValueStore, LocalStore, NavigatorAction,
    session,
};
use yew::prelude::*;

const WELCOME_PROMPT: &str = "welcome";

// Shared read-only services, so panels can notify and navigate without prop drilling
#[derive(Clone)]
pub struct ConsoleContext {
    pub config: ConsoleConfig,
    pub notifier: Notifier,
    pub store: Rc<dyn KeyValueStore>,
    pub nav: Rc<dyn NavigatorAction>,
}

impl PartialEq for ConsoleContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.notifier == other.notifier
            && Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.nav, &other.nav)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_reducer(ToastQueue::default);
    let push_toast: Callback<ToastRequest> = {
        let toasts = toasts.clone();
        Callback::from(move |req| toasts.dispatch(ToastAction::Push(req)))
    };

    // Built once: the device check is not re-run on resize
    let ctx = use_memo((), move |_| {
        let store: Rc<dyn KeyValueStore> = Rc::new(LocalStore);
        let nav: Rc<dyn NavigatorAction> = Rc::new(BrowserNavigator);
        let device = DeviceClass::detect(&BrowserNavigator);
        let config = ConsoleConfig::new(store.as_ref(), device);
        log::info!("console started, device={:?}", device);
        let sink: Rc<dyn ToastSink> = Rc::new(push_toast);
        ConsoleContext {
            notifier: Notifier::new(&config, sink, nav.clone()),
            config,
            store,
            nav,
        }
    });

    let store = ctx.store.as_ref();
    let user = session::current_user(store);
    let system_name = session::system_name(store);

    let show_welcome = use_state(|| session::should_show_prompt(store, WELCOME_PROMPT));
    let dismiss_welcome = {
        let show_welcome = show_welcome.clone();
        let store = ctx.store.clone();
        Callback::from(move |()| {
            show_welcome.set(false);
            session::set_prompt_shown(store.as_ref(), WELCOME_PROMPT);
        })
    };

    html! { <ContextProvider<ConsoleContext> context={(*ctx).clone()}>
        <div style="display:flex; flex-direction:column; min-height:100vh; background:#0d1117; color:#c9d1d9;">
            <HeaderBar
                system_name={system_name.clone()}
                logo={session::logo(store)}
                username={user.as_ref().and_then(|u| u.label().map(str::to_string))}
                is_admin={session::is_admin(store)}
                is_root={session::is_root(store)}
            />
            <main style="flex:1; display:grid; grid-template-columns:repeat(auto-fit, minmax(300px, 1fr)); gap:12px; padding:12px; align-content:start;">
                <TimeDisplay />
                <ToolsPanel />
            </main>
            <Footer system_name={system_name.clone()} html={session::footer_html(store)} />
        </div>
        <WelcomePrompt show={*show_welcome} system_name={system_name} on_dismiss={dismiss_welcome} />
        <ToastHost queue={toasts} />
    </ContextProvider<ConsoleContext>> }
}

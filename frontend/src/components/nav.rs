use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::catalog::ProductRecord;
use crate::config;
use crate::navigation::{hash_for, CONTACT_ANCHOR};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub catalog: &'static [ProductRecord],
    pub active: Option<&'static str>,
    pub on_select: Callback<&'static str>,
    pub on_anchor: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { catalog, active, on_select, on_anchor } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(root) = window.as_ref().and_then(|w| w.document()).and_then(|d| d.document_element()) {
                        is_scrolled.set(root.scroll_top() > config::NAV_SCROLLED_THRESHOLD_PX);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let contact_click = {
        let menu_open = menu_open.clone();
        let on_anchor = on_anchor.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_anchor.emit(format!("#{}", CONTACT_ANCHOR));
        })
    };

    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={scroll_to_top}>
                    {config::BRAND_NAME}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for catalog.iter().map(|product| {
                            let id = product.id;
                            let onclick = {
                                let menu_open = menu_open.clone();
                                let on_select = on_select.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu_open.set(false);
                                    on_select.emit(id);
                                })
                            };
                            html! {
                                <a
                                    href={hash_for(id)}
                                    class={classes!("nav-link", (*active == Some(id)).then(|| "active"))}
                                    {onclick}
                                >
                                    {product.name}
                                </a>
                            }
                        })
                    }
                    <a href={format!("#{}", CONTACT_ANCHOR)} class="nav-contact-button" onclick={contact_click}>
                        {"Contact"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

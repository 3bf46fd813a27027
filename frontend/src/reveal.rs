use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// `element_top` is in viewport coordinates, as returned by `getBoundingClientRect`.
pub fn is_in_view(element_top: f64, window_height: f64) -> bool {
    element_top < window_height - config::REVEAL_OFFSET_PX
}

fn check_reveal(node: &NodeRef, revealed: &UseStateHandle<bool>) {
    let Some(element) = node.cast::<Element>() else {
        return;
    };
    let Some(window_height) = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
    else {
        return;
    };

    if is_in_view(element.get_bounding_client_rect().top(), window_height) {
        revealed.set(true);
    }
}

/// Fades an element in the first time it scrolls into view. Once revealed it stays revealed.
#[hook]
pub fn use_scroll_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let initial_check = {
                    let node = node.clone();
                    let revealed = revealed.clone();
                    Timeout::new(config::REVEAL_INITIAL_CHECK_MS, move || check_reveal(&node, &revealed))
                };

                let scroll_callback = {
                    let node = node.clone();
                    Closure::wrap(Box::new(move || check_reveal(&node, &revealed)) as Box<dyn FnMut()>)
                };

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    drop(initial_check);
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_inside_offset_is_revealed() {
        assert!(is_in_view(0.0, 800.0));
        assert!(is_in_view(699.0, 800.0));
    }

    #[test]
    fn element_near_bottom_edge_stays_hidden() {
        assert!(!is_in_view(700.0, 800.0));
        assert!(!is_in_view(750.0, 800.0));
        assert!(!is_in_view(1200.0, 800.0));
    }

    #[test]
    fn element_above_viewport_counts_as_seen() {
        assert!(is_in_view(-400.0, 800.0));
    }
}

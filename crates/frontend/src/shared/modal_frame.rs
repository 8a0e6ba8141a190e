use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Overlay plus modal surface. Callers render their own header, body and footer.
///
/// Closes on Escape and on a click that both starts and ends on the overlay,
/// so selecting text inside the form and releasing outside keeps it open.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(optional)] modal_class: Option<String>,
    #[prop(optional)] modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        matches!((ev.target(), ev.current_target()), (Some(t), Some(ct)) if t == ct)
    };

    let close_deferred = move || {
        // the overlay must not be removed while its own click is dispatching
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let keydown = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if key_event.key() == "Escape" {
                close_deferred();
            }
        }
    });
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    }
    let keydown = StoredValue::new_local(keydown);
    on_cleanup(move || {
        keydown.with_value(|cb| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
            }
        });
    });

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let modal_style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=move |ev| {
                let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
                overlay_mouse_down.set(false);
                if should_close {
                    close_deferred();
                }
            }
        >
            <div class=modal_class style=modal_style on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

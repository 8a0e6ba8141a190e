use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::toast_service::ToastService;

/// Runs a create/update/delete call with the standard feedback:
/// `busy` is held while the request is in flight, success raises a toast and
/// calls `on_ok`, failure raises an error toast and leaves the caller's state alone.
pub fn run_mutation<T, Fut, F>(
    busy: RwSignal<bool>,
    toast: ToastService,
    success_message: impl Into<String>,
    request: Fut,
    on_ok: F,
) where
    T: 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
    F: FnOnce(T) + 'static,
{
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    let success_message = success_message.into();
    spawn_local(async move {
        let result = request.await;
        busy.set(false);
        match result {
            Ok(value) => {
                toast.success(success_message);
                on_ok(value);
            }
            Err(message) => toast.error(message),
        }
    });
}

/// Loads a list into `target`, reporting failure through `error`.
pub fn load_into<T, Fut>(
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    request: Fut,
    target: RwSignal<T>,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    loading.set(true);
    error.set(None);
    spawn_local(async move {
        match request.await {
            Ok(value) => target.set(value),
            Err(message) => error.set(Some(message)),
        }
        loading.set(false);
    });
}

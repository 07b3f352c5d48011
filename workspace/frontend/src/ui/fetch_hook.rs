use std::future::Future;
use std::rc::Rc;

use common::ApiError;
use yew::prelude::*;

use crate::hooks::FetchState;
use crate::ui::toast::use_toasts;

/// Runs `fetch_fn` whenever `deps` change and exposes its state plus a
/// callback to run it again. Failures are also raised as a toast.
#[hook]
pub fn use_fetch_with_refetch<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_toasts();
    let latest = use_mut_ref(|| None::<Rc<F>>);
    *latest.borrow_mut() = Some(Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();

        use_callback((), move |_, _| {
            let Some(fetch_fn) = latest.borrow().clone() else {
                return;
            };
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fut = fetch_fn();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        let message = err.message().to_string();
                        fetch_state.set(FetchState::Error(message.clone()));
                        toast_ctx.show_error(message);
                    }
                }
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

use common::resource::Action;
use common::ResourceEvent;
use compute::schedule::upcoming;
use model::{Id, ScheduledTransaction};
use yew::prelude::*;

use super::list::ScheduledList;
use super::scheduled_modal::ScheduledModal;
use crate::api_client::{use_api_client, AccountsApi, CategoriesApi, ScheduledApi};
use crate::hooks::use_resource;
use crate::session::{today, use_session};
use crate::ui::confirm::{confirm, confirm_delete};
use crate::ui::error::{list_status, StaleBanner};

#[function_component(ScheduledTransactions)]
pub fn scheduled_transactions() -> Html {
    log::trace!("ScheduledTransactions component rendering");
    let client = use_api_client();
    let owner = use_session().and_then(|s| s.user_id());
    let schedules = use_resource(ScheduledApi {
        client: client.clone(),
        owner,
    });
    let accounts = use_resource(AccountsApi {
        client: client.clone(),
        owner,
    });
    let categories = use_resource(CategoriesApi { client, kind: None });

    let show_modal = use_state(|| false);
    let selected = use_state(|| None::<ScheduledTransaction>);
    let modal_key = use_state(|| 0u32);
    let executing = use_state(|| None::<Id>);

    let open_modal = {
        let show_modal = show_modal.clone();
        let selected = selected.clone();
        let modal_key = modal_key.clone();
        Callback::from(move |scheduled: Option<ScheduledTransaction>| {
            selected.set(scheduled);
            modal_key.set(*modal_key + 1);
            show_modal.set(true);
        })
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            show_modal.set(false);
            selected.set(None);
        })
    };

    let on_delete = {
        let schedules = schedules.clone();
        Callback::from(move |scheduled: ScheduledTransaction| {
            if !confirm_delete("scheduled transaction", &scheduled.description) {
                return;
            }
            let schedules = schedules.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = schedules.remove(scheduled.id).await;
            });
        })
    };

    // Execution happens on the server; the returned schedule carries the
    // advanced due date.
    let on_execute = {
        let schedules = schedules.clone();
        let executing = executing.clone();
        Callback::from(move |scheduled: ScheduledTransaction| {
            if !confirm(&format!("Execute \"{}\" now?", scheduled.description)) {
                return;
            }
            let schedules = schedules.clone();
            let executing = executing.clone();
            executing.set(Some(scheduled.id));
            wasm_bindgen_futures::spawn_local(async move {
                let result = schedules.api().client.execute_scheduled(scheduled.id).await;
                schedules.dispatch(ResourceEvent::from_update(result, Action::Execute));
                executing.set(None);
            });
        })
    };

    let on_retry = {
        let schedules = schedules.clone();
        Callback::from(move |_| schedules.refresh())
    };

    let state = schedules.state();
    let due_soon = upcoming(&state.items, today(), 7).len();
    let on_add = open_modal.reform(|_: MouseEvent| None);
    let on_edit = open_modal.reform(Some);

    html! {
        <>
            <ScheduledModal
                key={*modal_key}
                show={*show_modal}
                on_close={on_close_modal}
                scheduled={(*selected).clone()}
                schedules={schedules.clone()}
                accounts={accounts.items().to_vec()}
                categories={categories.items().to_vec()}
            />

            <div class="flex justify-between items-center mb-4">
                <div>
                    <h2 class="text-2xl font-bold">{"Scheduled Transactions"}</h2>
                    if due_soon > 0 {
                        <p class="text-sm text-warning">{format!("{} due within the next 7 days", due_soon)}</p>
                    }
                </div>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Scheduled"}
                </button>
            </div>

            <StaleBanner message={state.error.clone().filter(|_| !state.items.is_empty())} on_retry={on_retry.clone()} />

            {
                match list_status(state, "No scheduled transactions. Add rent, salary or subscriptions to track them here.", on_retry) {
                    Some(status) => status,
                    None => html! {
                        <ScheduledList
                            scheduled={state.items.clone()}
                            on_edit={on_edit}
                            on_delete={on_delete}
                            on_execute={on_execute}
                            executing={*executing}
                        />
                    },
                }
            }
        </>
    }
}

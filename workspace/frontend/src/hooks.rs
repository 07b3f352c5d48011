use std::rc::Rc;

use common::resource::{create_item, update_item};
use common::{ApiError, Resource, ResourceApi, ResourceEvent, ResourceState};
use model::Id;
use yew::prelude::*;

use crate::ui::toast::{use_toasts, ToastContext};

/// State of a one-off request made by a view.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

/// Yew reducer over the shared [`ResourceState`].
pub struct ResourceStore<T>(ResourceState<T>);

impl<T: Resource + 'static> Reducible for ResourceStore<T> {
    type Action = ResourceEvent<T>;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(event);
        Rc::new(Self(state))
    }
}

/// One resource list owned by a page: the reducer handle, the scoped api
/// that feeds it and the toasts its events raise.
pub struct ResourceHandle<A: ResourceApi + 'static> {
    store: UseReducerHandle<ResourceStore<A::Item>>,
    api: Rc<A>,
    toasts: ToastContext,
}

impl<A: ResourceApi + 'static> Clone for ResourceHandle<A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            api: self.api.clone(),
            toasts: self.toasts.clone(),
        }
    }
}

// Same api instance and same state snapshot.
impl<A: ResourceApi + 'static> PartialEq for ResourceHandle<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && std::ptr::eq(self.state(), other.state())
    }
}

impl<A: ResourceApi + 'static> ResourceHandle<A> {
    pub fn state(&self) -> &ResourceState<A::Item> {
        &self.store.0
    }

    pub fn items(&self) -> &[A::Item] {
        &self.store.0.items
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Applies `event` and shows the notice it carries.
    pub fn dispatch(&self, event: ResourceEvent<A::Item>) {
        if let Some(notice) = event.notice() {
            self.toasts.notify(&notice);
        }
        self.store.dispatch(event);
    }

    pub fn refresh(&self) {
        let handle = self.clone();
        self.store.dispatch(ResourceEvent::Refreshing);
        wasm_bindgen_futures::spawn_local(async move {
            log::trace!("Refreshing {} list", <A::Item as Resource>::LABEL);
            let result = handle.api.fetch_all().await;
            handle.dispatch(ResourceEvent::from_refresh(result));
        });
    }

    /// Validates and creates `draft`. Validation failures come back as
    /// [`ApiError::Validation`] without touching the list or raising a toast.
    pub async fn create(&self, draft: &A::Draft) -> Result<A::Item, ApiError> {
        let result = create_item(self.api.as_ref(), draft).await;
        self.dispatch(ResourceEvent::from_create(result.clone()));
        result
    }

    pub async fn update(&self, id: Id, draft: &A::Draft) -> Result<A::Item, ApiError> {
        let result = update_item(self.api.as_ref(), id, draft).await;
        self.dispatch(ResourceEvent::from_update(
            result.clone(),
            common::resource::Action::Update,
        ));
        result
    }

    pub async fn remove(&self, id: Id) -> Result<(), ApiError> {
        let result = self.api.delete(id).await;
        self.dispatch(ResourceEvent::from_delete(id, result.clone()));
        result
    }
}

/// Fetches the list for `api` on mount and whenever `api` changes.
#[hook]
pub fn use_resource<A>(api: A) -> ResourceHandle<A>
where
    A: ResourceApi + Clone + PartialEq + 'static,
{
    let store = use_reducer(|| ResourceStore(ResourceState::default()));
    let toasts = use_toasts();
    let api: Rc<A> = (*use_memo(api, |api| Rc::new(api.clone()))).clone();

    let handle = ResourceHandle {
        store,
        api: api.clone(),
        toasts,
    };

    {
        let handle = handle.clone();
        use_effect_with(api, move |_| {
            handle.refresh();
            || ()
        });
    }

    handle
}

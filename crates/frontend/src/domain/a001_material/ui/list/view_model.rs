use contracts::domain::a001_material::aggregate::Material;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{MaterialsListState, Submit};
use crate::domain::a001_material::api;
use crate::layout::notification_service::{Notice, NotificationService};

/// ViewModel экрана материалов: состояние + команды.
///
/// Every command reads the state, awaits the API, then applies the response
/// in one `try_update`, so a response arriving after unmount is dropped.
#[derive(Clone, Copy)]
pub struct MaterialsViewModel {
    pub state: RwSignal<MaterialsListState>,
    notifications: NotificationService,
}

impl MaterialsViewModel {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            state: RwSignal::new(MaterialsListState::default()),
            notifications,
        }
    }

    fn notify(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.notifications.show(notice);
        }
    }

    /// Run a `begin_*` transition; a rejection is shown right away
    fn submit<T>(&self, begin: impl FnOnce(&mut MaterialsListState) -> Submit<T>) -> Option<T> {
        match self.state.try_update(begin)? {
            Submit::Ready(payload) => Some(payload),
            Submit::Rejected(notice) => {
                self.notifications.show(notice);
                None
            }
            Submit::Ignored => None,
        }
    }

    /// Load the full list
    pub fn load_command(&self) {
        let vm = *self;
        vm.state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = api::fetch_materials().await;
            vm.notify(vm.state.try_update(|s| s.finish_load(result)).flatten());
        });
    }

    pub fn create_command(&self) {
        let vm = *self;
        let Some(draft) = vm.submit(|s| s.begin_create()) else {
            return;
        };
        spawn_local(async move {
            let result = api::create_material(&draft).await;
            vm.notify(vm.state.try_update(|s| s.finish_create(result)));
        });
    }

    pub fn update_command(&self) {
        let vm = *self;
        let Some(edited) = vm.submit(|s| s.begin_update()) else {
            return;
        };
        spawn_local(async move {
            let result = api::update_material(edited.id, &edited).await;
            vm.notify(vm.state.try_update(|s| s.finish_update(edited.id, result)));
        });
    }

    pub fn delete_command(&self) {
        let vm = *self;
        let Some(id) = vm.submit(|s| s.begin_delete()) else {
            return;
        };
        spawn_local(async move {
            let result = api::delete_material(id).await;
            vm.notify(vm.state.try_update(|s| s.finish_delete(id, result)));
        });
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(&self, material: &Material) {
        self.state.update(|s| s.open_edit(material));
    }

    pub fn open_delete(&self, material: &Material) {
        self.state.update(|s| s.open_delete(material));
    }

    pub fn close_dialog(&self) {
        self.state.update(|s| s.close_dialog());
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting)
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(|s| s.can_submit())
    }
}

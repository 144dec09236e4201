use contracts::domain::a001_material::aggregate::{Material, MaterialDraft, MaterialId};

use crate::domain::a001_material::api::ApiError;
use crate::domain::a001_material::messages;
use crate::layout::notification_service::Notice;
use crate::shared::list_utils::{filter_list, Searchable};

impl Searchable for Material {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.name.to_lowercase().contains(filter_lower)
    }
}

/// Какое модальное окно сейчас открыто
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Create,
    Edit,
    Delete,
}

/// Результат попытки отправить диалог
#[derive(Debug, PartialEq, Eq)]
pub enum Submit<T> {
    /// Отправить payload в API
    Ready(T),
    /// Отклонено на клиенте: показать уведомление, запрос не отправляется
    Rejected(Notice),
    /// Ничего не делать: другой диалог или запрос уже выполняется
    Ignored,
}

/// Состояние экрана материалов.
///
/// `materials` меняется только по подтверждённому ответу сервера;
/// при ошибке список остаётся прежним.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialsListState {
    pub materials: Vec<Material>,
    pub search_term: String,
    /// Копия строки для редактирования / удаления
    pub selected: Option<Material>,
    pub draft: MaterialDraft,
    pub dialog: DialogState,
    pub is_loading: bool,
    pub is_submitting: bool,
}

impl Default for MaterialsListState {
    fn default() -> Self {
        Self {
            materials: Vec::new(),
            search_term: String::new(),
            selected: None,
            draft: MaterialDraft::default(),
            dialog: DialogState::Closed,
            is_loading: true,
            is_submitting: false,
        }
    }
}

fn failure_notice(error: &ApiError, generic: &str) -> Notice {
    Notice::error(error.server_message().unwrap_or(generic))
}

impl MaterialsListState {
    /// Материалы, имя которых содержит строку поиска (без учёта регистра), в порядке списка
    pub fn filtered(&self) -> Vec<Material> {
        filter_list(&self.materials, &self.search_term)
    }

    // ------------------------------------------------------------------
    // Loader
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Material>, ApiError>) -> Option<Notice> {
        self.is_loading = false;
        match result {
            Ok(materials) => {
                log::debug!("loaded {} materials", materials.len());
                self.materials = materials;
                None
            }
            Err(e) => {
                log::error!("Error loading materials: {}", e);
                Some(Notice::error(messages::LOAD_FAILED))
            }
        }
    }

    // ------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.dialog = DialogState::Create;
    }

    /// Строка копируется: таблица не меняется до ответа сервера
    pub fn open_edit(&mut self, material: &Material) {
        self.selected = Some(material.clone());
        self.dialog = DialogState::Edit;
    }

    pub fn open_delete(&mut self, material: &Material) {
        self.selected = Some(material.clone());
        self.dialog = DialogState::Delete;
    }

    /// Отмена: `materials` не меняется. Пока идёт запрос, игнорируется.
    pub fn close_dialog(&mut self) {
        if self.is_submitting {
            return;
        }
        match self.dialog {
            DialogState::Create => self.draft = MaterialDraft::default(),
            DialogState::Edit | DialogState::Delete => self.selected = None,
            DialogState::Closed => {}
        }
        self.dialog = DialogState::Closed;
    }

    pub fn set_draft_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_draft_active(&mut self, is_active: bool) {
        self.draft.is_active = is_active;
    }

    pub fn set_selected_name(&mut self, name: String) {
        if let Some(selected) = self.selected.as_mut() {
            selected.name = name;
        }
    }

    pub fn set_selected_active(&mut self, is_active: bool) {
        if let Some(selected) = self.selected.as_mut() {
            selected.is_active = is_active;
        }
    }

    /// Доступность кнопки отправки в диалогах
    pub fn can_submit(&self) -> bool {
        if self.is_submitting {
            return false;
        }
        match self.dialog {
            DialogState::Create => self.draft.has_valid_name(),
            DialogState::Edit => self.selected.as_ref().is_some_and(Material::has_valid_name),
            DialogState::Delete => self.selected.is_some(),
            DialogState::Closed => false,
        }
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    pub fn begin_create(&mut self) -> Submit<MaterialDraft> {
        if self.dialog != DialogState::Create || self.is_submitting {
            return Submit::Ignored;
        }
        if !self.draft.has_valid_name() {
            return Submit::Rejected(Notice::error(messages::NAME_REQUIRED));
        }
        self.is_submitting = true;
        Submit::Ready(self.draft.clone())
    }

    pub fn finish_create(&mut self, result: Result<Material, ApiError>) -> Notice {
        self.is_submitting = false;
        match result {
            Ok(material) => {
                self.materials.push(material);
                if self.dialog == DialogState::Create {
                    self.dialog = DialogState::Closed;
                }
                self.draft = MaterialDraft::default();
                Notice::success(messages::CREATED)
            }
            Err(e) => {
                log::error!("Error creating material: {}", e);
                failure_notice(&e, messages::CREATE_FAILED)
            }
        }
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    pub fn begin_update(&mut self) -> Submit<Material> {
        if self.dialog != DialogState::Edit || self.is_submitting {
            return Submit::Ignored;
        }
        match &self.selected {
            Some(selected) if selected.has_valid_name() => {
                self.is_submitting = true;
                Submit::Ready(selected.clone())
            }
            _ => Submit::Rejected(Notice::error(messages::NAME_REQUIRED)),
        }
    }

    pub fn finish_update(&mut self, id: MaterialId, result: Result<Material, ApiError>) -> Notice {
        self.is_submitting = false;
        match result {
            Ok(updated) => {
                if let Some(slot) = self.materials.iter_mut().find(|m| m.id == id) {
                    *slot = updated;
                }
                if self.dialog == DialogState::Edit {
                    self.dialog = DialogState::Closed;
                    self.selected = None;
                }
                Notice::success(messages::UPDATED)
            }
            Err(e) => {
                log::error!("Error updating material {}: {}", id, e);
                failure_notice(&e, messages::UPDATE_FAILED)
            }
        }
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    pub fn begin_delete(&mut self) -> Submit<MaterialId> {
        if self.dialog != DialogState::Delete || self.is_submitting {
            return Submit::Ignored;
        }
        match &self.selected {
            Some(selected) => {
                self.is_submitting = true;
                Submit::Ready(selected.id)
            }
            None => Submit::Ignored,
        }
    }

    pub fn finish_delete(&mut self, id: MaterialId, result: Result<(), ApiError>) -> Notice {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.materials.retain(|m| m.id != id);
                if self.dialog == DialogState::Delete {
                    self.dialog = DialogState::Closed;
                    self.selected = None;
                }
                Notice::success(messages::DELETED)
            }
            Err(e) => {
                log::error!("Error deleting material {}: {}", id, e);
                failure_notice(&e, messages::DELETE_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::notification_service::NoticeKind;

    fn material(id: i64, name: &str) -> Material {
        Material {
            id: MaterialId::new(id),
            name: name.to_string(),
            is_active: true,
            alloys_count: 0,
        }
    }

    fn loaded(materials: Vec<Material>) -> MaterialsListState {
        let mut state = MaterialsListState::default();
        assert_eq!(state.finish_load(Ok(materials)), None);
        state
    }

    fn server_error(message: Option<&str>) -> ApiError {
        ApiError::Http {
            status: 400,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = MaterialsListState::default();
        assert!(state.is_loading);
        assert!(!state.is_submitting);
        assert!(state.materials.is_empty());
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.draft, MaterialDraft::default());
    }

    #[test]
    fn test_failed_load_keeps_empty_list() {
        let mut state = MaterialsListState::default();
        state.begin_load();
        let notice = state.finish_load(Err(ApiError::Network("offline".into())));

        assert!(state.materials.is_empty());
        assert!(!state.is_loading);
        assert_eq!(notice, Some(Notice::error(messages::LOAD_FAILED)));
    }

    #[test]
    fn test_failed_reload_keeps_previous_list() {
        let mut state = loaded(vec![material(1, "Steel")]);
        state.begin_load();
        assert!(state.is_loading);
        let notice = state.finish_load(Err(ApiError::Network("offline".into())));

        assert_eq!(state.materials, vec![material(1, "Steel")]);
        assert!(!state.is_loading);
        assert_eq!(notice, Some(Notice::error(messages::LOAD_FAILED)));
    }

    #[test]
    fn test_load_replaces_list_wholesale() {
        let mut state = loaded(vec![material(1, "Old")]);
        state.begin_load();
        let notice = state.finish_load(Ok(vec![material(3, "Steel"), material(1, "Copper")]));
        assert_eq!(notice, None);
        let ids: Vec<i64> = state.materials.iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_filter_matches_case_folded_name() {
        let mut state = loaded(vec![
            material(1, "Steel"),
            material(2, "Copper"),
            material(3, "Stainless STEEL"),
        ]);

        assert_eq!(state.filtered(), state.materials);

        state.search_term = "steel".to_string();
        let names: Vec<String> = state.filtered().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Steel", "Stainless STEEL"]);

        state.search_term = "COP".to_string();
        assert_eq!(state.filtered(), vec![material(2, "Copper")]);

        // filtering never reorders or mutates the source list
        assert_eq!(state.materials.len(), 3);
    }

    #[test]
    fn test_create_appends_server_echo() {
        let mut state = loaded(vec![material(1, "Copper")]);
        state.open_create();
        state.set_draft_name("Steel".to_string());

        let draft = match state.begin_create() {
            Submit::Ready(draft) => draft,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(draft, MaterialDraft { name: "Steel".into(), is_active: true });
        assert!(state.is_submitting);
        assert!(!state.can_submit());

        let echoed = Material {
            id: MaterialId(7),
            name: "Steel".to_string(),
            is_active: true,
            alloys_count: 0,
        };
        let notice = state.finish_create(Ok(echoed.clone()));

        assert_eq!(notice, Notice::success(messages::CREATED));
        assert_eq!(state.materials.last(), Some(&echoed));
        assert_eq!(state.materials.len(), 2);
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.draft, MaterialDraft { name: String::new(), is_active: true });
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_create_with_blank_name_is_rejected() {
        let mut state = loaded(vec![material(1, "Copper")]);
        let before = state.materials.clone();
        state.open_create();
        state.set_draft_name("   ".to_string());

        assert!(!state.can_submit());
        assert_eq!(
            state.begin_create(),
            Submit::Rejected(Notice::error(messages::NAME_REQUIRED))
        );
        assert!(!state.is_submitting);
        assert_eq!(state.materials, before);
        assert_eq!(state.dialog, DialogState::Create);
    }

    #[test]
    fn test_failed_create_keeps_dialog_and_draft() {
        let mut state = loaded(vec![]);
        state.open_create();
        state.set_draft_name("Steel".to_string());
        state.set_draft_active(false);
        assert!(matches!(state.begin_create(), Submit::Ready(_)));

        let notice = state.finish_create(Err(server_error(Some("duplicate name"))));

        assert_eq!(notice, Notice::error("duplicate name"));
        assert!(state.materials.is_empty());
        assert_eq!(state.dialog, DialogState::Create);
        assert_eq!(state.draft, MaterialDraft { name: "Steel".into(), is_active: false });
        assert!(!state.is_submitting);
        assert!(state.can_submit());
    }

    #[test]
    fn test_failure_without_server_message_uses_generic_text() {
        let mut state = loaded(vec![]);
        state.open_create();
        state.set_draft_name("Steel".to_string());
        assert!(matches!(state.begin_create(), Submit::Ready(_)));

        let notice = state.finish_create(Err(ApiError::Network("offline".into())));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, messages::CREATE_FAILED);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut state = loaded(vec![]);
        state.open_create();
        state.set_draft_name("Steel".to_string());
        assert!(matches!(state.begin_create(), Submit::Ready(_)));
        assert_eq!(state.begin_create(), Submit::Ignored);
    }

    #[test]
    fn test_close_create_resets_draft_only() {
        let mut state = loaded(vec![material(1, "Copper")]);
        let before = state.materials.clone();
        state.open_create();
        state.set_draft_name("Half typed".to_string());
        state.close_dialog();

        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.draft, MaterialDraft::default());
        assert_eq!(state.materials, before);
    }

    #[test]
    fn test_close_is_ignored_while_submitting() {
        let mut state = loaded(vec![]);
        state.open_create();
        state.set_draft_name("Steel".to_string());
        assert!(matches!(state.begin_create(), Submit::Ready(_)));
        state.close_dialog();
        assert_eq!(state.dialog, DialogState::Create);
    }

    #[test]
    fn test_edit_works_on_a_copy() {
        let mut state = loaded(vec![material(3, "Steel")]);
        let row = state.materials[0].clone();
        state.open_edit(&row);
        state.set_selected_name("Stainless Steel".to_string());
        state.set_selected_active(false);

        assert_eq!(state.materials[0].name, "Steel");
        assert!(state.materials[0].is_active);

        state.close_dialog();
        assert_eq!(state.selected, None);
        assert_eq!(state.materials, vec![material(3, "Steel")]);
    }

    #[test]
    fn test_update_replaces_only_matching_entry_in_place() {
        let mut state = loaded(vec![
            material(1, "Copper"),
            material(3, "Steel"),
            material(5, "Zinc"),
        ]);
        let row = state.materials[1].clone();
        state.open_edit(&row);
        state.set_selected_name("Stainless Steel".to_string());

        let edited = match state.begin_update() {
            Submit::Ready(m) => m,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(edited.id, MaterialId(3));
        assert_eq!(edited.name, "Stainless Steel");

        let mut from_server = edited.clone();
        from_server.alloys_count = 2;
        let notice = state.finish_update(edited.id, Ok(from_server.clone()));

        assert_eq!(notice, Notice::success(messages::UPDATED));
        assert_eq!(
            state.materials,
            vec![material(1, "Copper"), from_server, material(5, "Zinc")]
        );
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_update_with_blank_name_is_rejected() {
        let mut state = loaded(vec![material(3, "Steel")]);
        let row = state.materials[0].clone();
        state.open_edit(&row);
        state.set_selected_name(" \t".to_string());

        assert!(!state.can_submit());
        assert_eq!(
            state.begin_update(),
            Submit::Rejected(Notice::error(messages::NAME_REQUIRED))
        );
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_failed_update_keeps_edits() {
        let mut state = loaded(vec![material(3, "Steel")]);
        let row = state.materials[0].clone();
        state.open_edit(&row);
        state.set_selected_name("Stainless Steel".to_string());
        assert!(matches!(state.begin_update(), Submit::Ready(_)));

        let notice = state.finish_update(MaterialId(3), Err(server_error(None)));

        assert_eq!(notice, Notice::error(messages::UPDATE_FAILED));
        assert_eq!(state.materials, vec![material(3, "Steel")]);
        assert_eq!(state.dialog, DialogState::Edit);
        assert_eq!(
            state.selected.as_ref().map(|m| m.name.as_str()),
            Some("Stainless Steel")
        );
    }

    #[test]
    fn test_delete_removes_exactly_that_entry() {
        let mut state = loaded(vec![
            material(1, "Copper"),
            material(3, "Steel"),
            material(5, "Zinc"),
        ]);
        let row = state.materials[1].clone();
        state.open_delete(&row);

        assert_eq!(state.begin_delete(), Submit::Ready(MaterialId(3)));
        let notice = state.finish_delete(MaterialId(3), Ok(()));

        assert_eq!(notice, Notice::success(messages::DELETED));
        assert_eq!(state.materials, vec![material(1, "Copper"), material(5, "Zinc")]);
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_failed_delete_keeps_list_and_dialog() {
        let mut state = loaded(vec![material(1, "Copper"), material(3, "Steel")]);
        let before = state.materials.clone();
        let row = state.materials[1].clone();
        state.open_delete(&row);
        assert_eq!(state.begin_delete(), Submit::Ready(MaterialId(3)));

        let notice = state.finish_delete(MaterialId(3), Err(server_error(Some("in use"))));

        assert_eq!(notice, Notice::error("in use"));
        assert_eq!(state.materials, before);
        assert_eq!(state.dialog, DialogState::Delete);
        assert_eq!(state.selected, Some(material(3, "Steel")));
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_finish_does_not_close_a_different_dialog() {
        let mut state = loaded(vec![material(1, "Copper")]);
        state.open_create();
        state.set_draft_name("Steel".to_string());
        assert!(matches!(state.begin_create(), Submit::Ready(_)));

        // another dialog opened while the create request is pending
        let row = state.materials[0].clone();
        state.open_delete(&row);
        state.finish_create(Ok(material(7, "Steel")));

        assert_eq!(state.dialog, DialogState::Delete);
        assert_eq!(state.selected, Some(material(1, "Copper")));
        assert_eq!(state.materials.len(), 2);
    }

    #[test]
    fn test_submit_from_wrong_dialog_is_ignored() {
        let mut state = loaded(vec![material(1, "Copper")]);
        assert_eq!(state.begin_create(), Submit::Ignored);
        assert_eq!(state.begin_update(), Submit::Ignored);
        assert_eq!(state.begin_delete(), Submit::Ignored);
        assert!(!state.is_submitting);
    }
}

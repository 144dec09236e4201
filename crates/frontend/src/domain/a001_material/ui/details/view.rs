use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_material::ui::list::MaterialsViewModel;
use crate::shared::modal::Modal;

/// Поля формы материала: имя и переключатель активности
#[component]
fn MaterialFormFields(
    #[prop(into)] input_id: String,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] is_active: Signal<bool>,
    on_name: Callback<String>,
    on_active: Callback<bool>,
    /// Enter in the name field
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="details-form">
            <div class="form__group">
                <label for=input_id.clone()>"نام متریال"</label>
                <input
                    type="text"
                    id=input_id
                    placeholder="نام متریال را وارد کنید"
                    prop:value=move || name.get()
                    on:input=move |ev| on_name.run(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_submit.run(());
                        }
                    }
                />
            </div>
            <div class="form__group form__group--inline">
                <label class="switch">
                    <input
                        type="checkbox"
                        role="switch"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| on_active.run(event_target_checked(&ev))
                    />
                    <span class="switch__label">"فعال"</span>
                </label>
            </div>
        </div>
    }
}

#[component]
fn MaterialDialogActions(
    vm: MaterialsViewModel,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-footer">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| vm.close_dialog()
                disabled=Signal::derive(move || vm.is_submitting())
            >
                "انصراف"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_submit.run(())
                disabled=Signal::derive(move || !vm.can_submit())
            >
                {move || if vm.is_submitting() { "در حال ذخیره..." } else { submit_label }}
            </Button>
        </div>
    }
}

#[component]
pub fn CreateMaterialDialog(vm: MaterialsViewModel) -> impl IntoView {
    let state = vm.state;
    let submit = Callback::new(move |_: ()| vm.create_command());

    view! {
        <Modal title="افزودن متریال جدید" on_close=Callback::new(move |_: ()| vm.close_dialog())>
            <MaterialFormFields
                input_id="name"
                name=Signal::derive(move || state.with(|s| s.draft.name.clone()))
                is_active=Signal::derive(move || state.with(|s| s.draft.is_active))
                on_name=Callback::new(move |v: String| state.update(|s| s.set_draft_name(v)))
                on_active=Callback::new(move |v: bool| state.update(|s| s.set_draft_active(v)))
                on_submit=submit
            />
            <MaterialDialogActions vm=vm submit_label="ذخیره" on_submit=submit />
        </Modal>
    }
}

#[component]
pub fn EditMaterialDialog(vm: MaterialsViewModel) -> impl IntoView {
    let state = vm.state;
    let submit = Callback::new(move |_: ()| vm.update_command());

    view! {
        <Modal title="ویرایش متریال" on_close=Callback::new(move |_: ()| vm.close_dialog())>
            <MaterialFormFields
                input_id="edit-name"
                name=Signal::derive(move || {
                    state.with(|s| s.selected.as_ref().map(|m| m.name.clone()).unwrap_or_default())
                })
                is_active=Signal::derive(move || {
                    state.with(|s| s.selected.as_ref().is_some_and(|m| m.is_active))
                })
                on_name=Callback::new(move |v: String| state.update(|s| s.set_selected_name(v)))
                on_active=Callback::new(move |v: bool| state.update(|s| s.set_selected_active(v)))
                on_submit=submit
            />
            <MaterialDialogActions vm=vm submit_label="به‌روزرسانی" on_submit=submit />
        </Modal>
    }
}

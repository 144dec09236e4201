use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_material::ui::list::MaterialsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Подтверждение удаления; вместе с материалом сервер удаляет все его сплавы
#[component]
pub fn DeleteMaterialDialog(vm: MaterialsViewModel) -> impl IntoView {
    let state = vm.state;
    let name = move || {
        state.with(|s| s.selected.as_ref().map(|m| m.name.clone()).unwrap_or_default())
    };

    view! {
        <Modal title="حذف متریال" on_close=Callback::new(move |_: ()| vm.close_dialog())>
            <div class="alert alert--warning">
                {icon("alert-triangle")}
                <p>"آیا از حذف این متریال اطمینان دارید؟"</p>
            </div>
            <p class="text-muted">
                {move || format!(
                    "با حذف متریال \"{}\"، تمامی آلیاژهای مرتبط با آن نیز حذف خواهند شد.",
                    name()
                )}
            </p>
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
                    attr:class="button--danger"
                    on_click=move |_| vm.delete_command()
                    disabled=Signal::derive(move || !vm.can_submit())
                >
                    {move || if vm.is_submitting() { "در حال حذف..." } else { "حذف" }}
                </Button>
            </div>
        </Modal>
    }
}

mod state;
mod view_model;

use contracts::domain::a001_material::aggregate::Material;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_material::ui::details::{
    CreateMaterialDialog, DeleteMaterialDialog, EditMaterialDialog,
};
use crate::layout::notification_service::use_notifications;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use state::DialogState;
pub use view_model::MaterialsViewModel;

#[component]
fn MaterialRow(vm: MaterialsViewModel, index: usize, material: Material) -> impl IntoView {
    let for_edit = material.clone();
    let for_delete = material.clone();

    view! {
        <TableRow>
            <TableCell>{index + 1}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{material.name.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{format!("{} آلیاژ", material.alloys_count)}</TableCell>
            <TableCell>
                {if material.is_active {
                    view! { <span class="badge badge--success">"فعال"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--neutral">"غیرفعال"</span> }.into_any()
                }}
            </TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.open_edit(&for_edit)
                    attr:title="ویرایش"
                >
                    {icon("edit")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.open_delete(&for_delete)
                    attr:title="حذف"
                    attr:class="button--danger-text"
                >
                    {icon("trash")}
                </Button>
            </TableCell>
        </TableRow>
    }
}

/// Экран «Материалы»: список, поиск, создание, редактирование, удаление
#[component]
#[allow(non_snake_case)]
pub fn MaterialsPage() -> impl IntoView {
    let vm = MaterialsViewModel::new(use_notifications());
    let state = vm.state;

    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading));
    let rows = Memo::new(move |_| state.with(|s| s.filtered()));
    let total = Memo::new(move |_| state.with(|s| s.materials.len()));
    let dialog = Memo::new(move |_| state.with(|s| s.dialog));

    vm.load_command();

    view! {
        <PageFrame page_id="a001_material--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"مدیریت متریال‌ها"</h1>
                    <Badge>{move || total.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.open_create()
                    >
                        {icon("plus")}
                        " افزودن متریال جدید"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="search-box__input"
                        placeholder="جستجو..."
                        prop:value=move || state.with(|s| s.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.search_term = term);
                        }
                    />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"لیست متریال‌ها"</h2>
                    </div>
                    <div class="card__content">
                        <Show
                            when=move || !is_loading.get()
                            fallback=|| view! { <div class="loading"><Spinner /></div> }
                        >
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell resizable=false min_width=60.0>"ردیف"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=180.0>"نام متریال"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=100.0>"تعداد آلیاژ"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=90.0>"وضعیت"</TableHeaderCell>
                                        <TableHeaderCell resizable=false min_width=90.0>"عملیات"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || {
                                        let rows = rows.get();
                                        if rows.is_empty() {
                                            view! {
                                                <TableRow>
                                                    <TableCell attr:colspan="5" attr:class="table__cell--empty">
                                                        "هیچ متریالی یافت نشد"
                                                    </TableCell>
                                                </TableRow>
                                            }.into_any()
                                        } else {
                                            rows.into_iter()
                                                .enumerate()
                                                .map(|(index, material)| view! {
                                                    <MaterialRow vm=vm index=index material=material />
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </TableBody>
                            </Table>
                        </Show>
                    </div>
                </div>
            </div>

            {move || match dialog.get() {
                DialogState::Create => view! { <CreateMaterialDialog vm=vm /> }.into_any(),
                DialogState::Edit => view! { <EditMaterialDialog vm=vm /> }.into_any(),
                DialogState::Delete => view! { <DeleteMaterialDialog vm=vm /> }.into_any(),
                DialogState::Closed => view! { <></> }.into_any(),
            }}
        </PageFrame>
    }
}

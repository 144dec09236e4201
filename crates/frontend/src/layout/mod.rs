pub mod notification_service;

use leptos::prelude::*;

/// Корневой контейнер приложения (RTL, одна колонка контента)
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" dir="rtl">
            <div class="app-main">
                {children()}
            </div>
        </div>
    }
}

use crate::domain::a001_material::ui::list::MaterialsPage;
use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts for the whole app
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <Shell>
                <MaterialsPage />
            </Shell>
            <NotificationHost />
        </ConfigProvider>
    }
}

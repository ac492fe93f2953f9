use crate::dashboards::AnalyticsDashboard;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AnalyticsDashboard />
        </ConfigProvider>
    }
}

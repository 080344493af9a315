use crate::routes::routes::PRODUCT_CREATE_PATH;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page of product maintenance; the form redirects here when done
#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Productos">
                <A href=PRODUCT_CREATE_PATH attr:class="button button--primary">
                    {icon("plus")}
                    {"Nuevo producto"}
                </A>
            </PageHeader>
            <div class="page__content">
                <p class="page__empty">{"Crea un producto para empezar."}</p>
            </div>
        </PageFrame>
    }
}

use crate::domain::a002_product::ui::create::ProductCreate;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

pub const PRODUCT_LIST_PATH: &str = "/admin/mantenimiento/producto";
pub const PRODUCT_CREATE_PATH: &str = "/admin/mantenimiento/producto/crear";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h2>{"Página no encontrada"}</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=PRODUCT_LIST_PATH /> } />
                    <Route path=path!("/admin/mantenimiento/producto") view=ProductList />
                    <Route path=path!("/admin/mantenimiento/producto/crear") view=ProductCreate />
                </Routes>
            </Shell>
        </Router>
    }
}

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::pages::reset_password::ResetPasswordPage;

pub const ROUTE_PATHS: &[&str] = &["/", "/reset"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="Restablecer contraseña"/>
        <Router>
            <Routes>
                <Route path="/" view=ResetPasswordPage/>
                <Route path="/reset" view=ResetPasswordPage/>
            </Routes>
        </Router>
    }
}

//! Billed Frontend App
//!
//! Hash router over the employee pages.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::BillStore;
use crate::components::{BillsScreen, DashboardShell, NewBillScreen};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::routes::Route;
use crate::session::Session;
use crate::store::AppState;

/// Page shown for `hash`; the login path lands on the user's home page
pub fn landing_route(hash: &str, session: &Session) -> Route {
    match Route::from_path(hash) {
        Route::Login if session.is_employee() => Route::Bills,
        Route::Login => Route::Dashboard,
        route => route,
    }
}

#[component]
pub fn App(store: Rc<dyn BillStore>, session: Option<Session>, config: AppConfig) -> impl IntoView {
    let Some(session) = session else {
        return view! {
            <div class="login-notice" data-testid="login">
                "Veuillez vous connecter pour accéder à vos notes de frais."
            </div>
        }
        .into_any();
    };

    let hash = window().location().hash().unwrap_or_default();
    let (route, set_route) = signal(landing_route(&hash, &session));
    let home = landing_route("", &session);

    let ctx = AppContext::new((route, set_route), store, session, config);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    let _hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = window().location().hash().unwrap_or_default();
        let next = match Route::from_path(&hash) {
            Route::Login => home,
            r => r,
        };
        if next != route.get_untracked() {
            log::debug!("[App] hash changed to {}", next.path());
            set_route.set(next);
        }
    });

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Bills | Route::Login => view! { <BillsScreen /> }.into_any(),
                Route::NewBill => view! { <NewBillScreen /> }.into_any(),
                Route::Dashboard => view! {
                    <DashboardShell route=Route::Dashboard>
                        <div class="admin-notice" data-testid="dashboard">
                            "Le tableau de bord administrateur n'est pas disponible ici."
                        </div>
                    </DashboardShell>
                }
                .into_any(),
            }}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    #[test]
    fn test_login_lands_on_home_page() {
        let employee = Session::employee("a@a");
        assert_eq!(landing_route("", &employee), Route::Bills);
        assert_eq!(landing_route("#employee/bill/new", &employee), Route::NewBill);

        let admin = Session {
            user_type: UserType::Admin,
            ..Session::employee("admin@a")
        };
        assert_eq!(landing_route("#unknown", &admin), Route::Dashboard);
        assert_eq!(landing_route("#employee/bills", &admin), Route::Bills);
    }
}

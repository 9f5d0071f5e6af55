//! Application Context
//!
//! Shared handles provided via Leptos Context API: current route, the store
//! client, the signed-in session and the configuration.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::BillStore;
use crate::config::AppConfig;
use crate::containers::{Alert, BillsContainer, LoadSequence, Navigate, NewBillContainer};
use crate::routes::Route;
use crate::session::Session;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    store: StoredValue<Rc<dyn BillStore>, LocalStorage>,
    session: StoredValue<Session>,
    config: StoredValue<AppConfig>,
    bill_loads: StoredValue<Rc<LoadSequence>, LocalStorage>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        store: Rc<dyn BillStore>,
        session: Session,
        config: AppConfig,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            store: StoredValue::new_local(store),
            session: StoredValue::new(session),
            config: StoredValue::new(config),
            bill_loads: StoredValue::new_local(Rc::new(LoadSequence::default())),
        }
    }

    /// Switch page and mirror it in `location.hash`
    pub fn navigate(&self, route: Route) {
        log::debug!("[App] navigate to {}", route.path());
        if let Err(e) = window().location().set_hash(route.path()) {
            log::warn!("[App] could not update location: {:?}", e);
        }
        self.set_route.set(route);
    }

    pub fn navigator(&self) -> Navigate {
        let ctx = *self;
        Rc::new(move |route| ctx.navigate(route))
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Shared across mounts of the bills page
    pub fn bill_loads(&self) -> Rc<LoadSequence> {
        self.bill_loads.get_value()
    }

    pub fn bills_container(&self) -> BillsContainer {
        BillsContainer::new(self.store.get_value(), self.navigator(), &self.config())
    }

    pub fn new_bill_container(&self) -> NewBillContainer {
        let alert: Alert = Rc::new(|message: &str| {
            if let Err(e) = window().alert_with_message(message) {
                log::warn!("[App] alert failed: {:?}", e);
            }
        });
        NewBillContainer::new(
            self.store.get_value(),
            self.session(),
            self.navigator(),
            alert,
            self.config(),
        )
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

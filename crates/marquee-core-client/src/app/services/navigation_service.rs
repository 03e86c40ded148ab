// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;
use tracing::debug;

use marquee_proc_macros::InjectDependencies;

use crate::app::deps::DynAppContext;
use crate::domain::navigation::models::Route;

/// Gates views that require a session. Unauthenticated access to such a view is redirected
/// to the login view, which remembers where the user wanted to go.
#[derive(InjectDependencies)]
pub struct NavigationService {
    #[inject]
    ctx: DynAppContext,
    pending_destination: Mutex<Option<Route>>,
}

impl NavigationService {
    /// Returns the route that should actually be shown when navigating to `route`.
    pub fn resolve(&self, route: Route) -> Route {
        let is_signed_in = self.ctx.is_signed_in();

        match route {
            route if route.requires_session() && !is_signed_in => {
                debug!("Redirecting {:?} to login.", route);
                *self.pending_destination.lock() = Some(route.clone());
                Route::Login {
                    return_to: Some(Box::new(route)),
                }
            }
            Route::Login { return_to } if is_signed_in => {
                let remembered = self.pending_destination.lock().take();
                return_to.map(|route| *route).or(remembered).unwrap_or_default()
            }
            Route::Login { return_to } => {
                *self.pending_destination.lock() = return_to.as_deref().cloned();
                Route::Login { return_to }
            }
            route => {
                // Leaving the login flow forgets where it would have led.
                self.pending_destination.lock().take();
                route
            }
        }
    }

    /// The destination to show after a successful login. Consumes the remembered
    /// destination, defaulting to the catalog.
    pub fn route_after_login(&self) -> Route {
        self.pending_destination.lock().take().unwrap_or_default()
    }
}

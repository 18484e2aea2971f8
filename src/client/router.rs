use dioxus::prelude::*;

use crate::{
    auth::PortalRoute,
    client::{
        components::{ProtectedLayout, PublicLayout, Shell},
        routes::{
            Dashboard, Enrollment, Finances, Login, NotFound, PersonalInfo, ResetPassword,
            Services,
        },
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]

    #[layout(PublicLayout)]

        #[route("/login")]
        Login {},

        #[route("/reset-password")]
        ResetPassword {},

    #[end_layout]

    #[layout(ProtectedLayout)]
    #[layout(Shell)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/personal-info")]
        PersonalInfo {},

        #[route("/enrollment")]
        Enrollment {},

        #[route("/finances?:tab")]
        Finances { tab: String },

        #[route("/services")]
        Services {},

    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<PortalRoute> for Route {
    fn from(route: PortalRoute) -> Self {
        match route {
            PortalRoute::Root | PortalRoute::Dashboard => Route::Dashboard {},
            PortalRoute::Login => Route::Login {},
            PortalRoute::ResetPassword => Route::ResetPassword {},
            PortalRoute::PersonalInfo => Route::PersonalInfo {},
            PortalRoute::Enrollment => Route::Enrollment {},
            PortalRoute::Finances => Route::Finances { tab: String::new() },
            PortalRoute::Services => Route::Services {},
            PortalRoute::NotFound => Route::NotFound {
                segments: vec!["404".to_string()],
            },
        }
    }
}

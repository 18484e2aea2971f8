#![allow(non_snake_case)]

use student_portal::client;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use student_portal::server::{self, config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::session_layer(&config);
        let state = AppState::new(&config);

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}

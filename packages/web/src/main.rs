use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::UsersApi;
use store::AppConfig;
use ui::ToastProvider;
use views::Users;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/users")]
    Users {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Defaults compiled into the binary, overridden at runtime.
const COMPILED_DEFAULTS: &str = include_str!("../console.toml");

fn main() {
    // `production` is never overridden at runtime, so the bundle alone
    // decides the log level and the logger is up before overrides are read.
    let bundled = AppConfig::from_toml(COMPILED_DEFAULTS);
    let level = if bundled.as_ref().is_ok_and(|c| c.production) {
        Level::INFO
    } else {
        Level::DEBUG
    };
    dioxus::logger::init(level).expect("failed to init logger");

    let config = ui::load_app_config(bundled);

    tracing::info!(
        api_url = %config.api_url,
        api_version = %config.api_version,
        toast = config.features.enable_toast,
        pagination = config.features.enable_pagination,
        page_size = config.features.default_page_size,
        "Resolved console configuration"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| UsersApi::from_config(&config));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::CONSOLE_CSS }

        ToastProvider {
            enabled: config.features.enable_toast,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/users`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Users {});
    rsx! {}
}

/// Any unknown path lands on `/users`
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("Unknown route /{}, redirecting", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Users {});
    rsx! {}
}

//! Browser entry point: installs panic/log hooks and mounts the app.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).expect("logger init failed");

        leptos::mount::mount_to_body(ecovest_client::app::App);
    }
}

pub mod api;
pub mod config;
pub mod pages;
pub mod router;
#[cfg(test)]
mod test_support;

/// Browser entry point: installs the panic hook and logger, starts resolving
/// the reset endpoint in the background, then mounts the page.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting reset portal frontend (wasm)");

    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}

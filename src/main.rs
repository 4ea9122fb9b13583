//! Wave Portfolio entry point
//!
//! Native builds run the static content host. The wasm32 build is the
//! browser side and starts the wave game on page load.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wave_portfolio::platform::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use wave_portfolio::settings::ServerSettings;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Wave Portfolio (native) starting...");

    let settings = ServerSettings::from_env()?;
    log::info!("Settings: {}", serde_json::to_string(&settings)?);

    wave_portfolio::server::serve(settings).await
}

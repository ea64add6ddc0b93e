#[cfg(feature = "yew")]
fn main() {
    use rosterreview_yew::{App, LogConfig};

    let log_config = if cfg!(debug_assertions) {
        LogConfig::dev()
    } else {
        LogConfig::default()
    };
    log_config.init();

    tracing::info!("Starting roster review");
    yew::Renderer::<App>::new().render();
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}

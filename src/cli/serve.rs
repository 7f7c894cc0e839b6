use crate::{config::Config, error, info, server, success, warning};

/// Runs the web backend until interrupted.
///
/// With `open_browser` the index page is opened once the server task has
/// been spawned. Exits the process on bind or serve failure.
pub async fn serve(config: Config, open_browser: bool) {
    if !config.has_credentials() {
        warning!(
            "SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET is not set; every recommendation will fail to authenticate."
        );
    }

    let url = format!("http://{}/", config.server_address);
    info!("Starting moodtracks on {}", url);

    let handle = tokio::spawn(server::start_api_server(config));

    if open_browser && webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Please navigate to {} manually.", url);
    }

    match handle.await {
        Ok(Ok(())) => success!("Server stopped."),
        Ok(Err(e)) => error!("Server failed. Err: {}", e),
        Err(e) => error!("Server task aborted. Err: {}", e),
    }
}

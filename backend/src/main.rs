use axum::{routing::get, Router};
use countdown::CountdownTicker;
use shared_data::{Remaining, WeddingConfig};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::watch;
use tower_http::services::ServeDir;
use tracing::{info, warn};

mod countdown;
mod faq;
mod gallery;
mod main_page;
mod rsvp;
mod style;
mod travel;
mod venue;


#[derive(Clone)]
pub struct AppState {
	pub config: Arc<WeddingConfig>,
	pub countdown: watch::Receiver<Remaining>
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	tracing_subscriber::fmt::init();

	let port = dotenv_num!("SITE_PORT", 8080, u16);
	let config_path = dotenv::var("WEDDING_CONFIG").unwrap_or_else(|_| "wedding.json".into());

	let raw = std::fs::read_to_string(&config_path).map_err(|e| format!(
		"couldn't read the wedding config at {config_path} \
		(set WEDDING_CONFIG to point somewhere else): {e}"
	))?;
	let config = WeddingConfig::from_json(&raw)?;

	info!(couple = %config.couple, date = %config.date, "loaded wedding config from {config_path}");

	if config.rsvp_form_url().is_none() {
		warn!("no rsvp_form_url configured; the RSVP section will show a placeholder");
	}
	if config.registry_url().is_none() {
		info!("no registry_url configured; the registry section will say 'coming soon'");
	}

	// The ticker lives as long as the server; dropping it is what cancels the
	// once-a-second refresh.
	let (ticker, countdown) = CountdownTicker::spawn(config.date);

	let state = AppState {
		config: Arc::new(config),
		countdown
	};

	let mut app = Router::new()
		.route("/", get(main_page::get_wedding_page))
		.route("/api/countdown", get(countdown::get_countdown))
		.with_state(state);

	// Photos can just as well be external URLs, so a missing local directory
	// only costs us the /photos mount, not startup.
	let photo_dir = dotenv::var("PHOTO_DIR").unwrap_or_else(|_| "photos".into());
	match std::fs::metadata(&photo_dir) {
		Ok(mtd) if mtd.is_dir() => {
			info!("serving photos out of {photo_dir}");
			app = app.nest_service("/photos", ServeDir::new(photo_dir));
		}
		Ok(_) => warn!("PHOTO_DIR ({photo_dir}) isn't a directory; /photos won't be served"),
		Err(e) => warn!("couldn't read PHOTO_DIR ({photo_dir}): {e}; /photos won't be served")
	}

	let addr = SocketAddr::from(([127, 0, 0, 1], port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!("serving the wedding site on {addr}");

	axum::serve(listener, app).await?;

	drop(ticker);
	Ok(())
}

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Everything the operator edits to customize the site, loaded once at
/// startup and read-only from then on. Dates are ISO-8601 with an offset so
/// the countdown doesn't depend on wherever the server happens to run.
#[derive(Deserialize, Clone, Debug)]
pub struct WeddingConfig {
	pub couple: String,
	pub date: DateTime<FixedOffset>,
	pub rsvp_by: DateTime<FixedOffset>,
	pub venue_name: String,
	pub venue_address: String,
	#[serde(default)]
	pub venue_website: String,
	#[serde(default)]
	pub venue_packages_url: String,
	pub ceremony_time: String,
	pub dinner_time: String,
	#[serde(default)]
	pub dinner_note: String,
	#[serde(default)]
	pub kids_welcome: bool,
	#[serde(default)]
	pub parking: String,
	#[serde(default)]
	pub hero_image_url: String,
	#[serde(default)]
	pub rsvp_form_url: String,
	#[serde(default)]
	pub registry_url: String,
	#[serde(default)]
	pub photos: Vec<Photo>,
	#[serde(default)]
	pub hotels: Vec<HotelTier>
}

#[derive(Deserialize, Clone, Debug)]
pub struct Photo {
	pub src: String,
	#[serde(default)]
	pub caption: String
}

#[derive(Deserialize, Clone, Debug)]
pub struct HotelTier {
	pub tier: String,
	pub items: Vec<Hotel>
}

#[derive(Deserialize, Clone, Debug)]
pub struct Hotel {
	pub name: String,
	#[serde(default)]
	pub area: String,
	pub url: String,
	#[serde(default)]
	pub notes: String
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("couldn't parse wedding config: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("the '{0}' field can't be empty")]
	EmptyField(&'static str),
	#[error("the rsvp deadline ({rsvp_by}) falls after the wedding itself ({date})")]
	RsvpAfterWedding {
		rsvp_by: DateTime<FixedOffset>,
		date: DateTime<FixedOffset>
	}
}

impl WeddingConfig {
	/// Parses and validates the config. We'd rather refuse to start than
	/// serve a page with a blank couple or a deadline nobody can meet.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let mut config: Self = serde_json::from_str(json)?;

		for (name, value) in [
			("couple", &config.couple),
			("venue_name", &config.venue_name),
			("venue_address", &config.venue_address),
			("ceremony_time", &config.ceremony_time),
			("dinner_time", &config.dinner_time)
		] {
			if value.trim().is_empty() {
				return Err(ConfigError::EmptyField(name));
			}
		}

		if config.rsvp_by > config.date {
			return Err(ConfigError::RsvpAfterWedding {
				rsvp_by: config.rsvp_by,
				date: config.date
			});
		}

		// nobody wants an <img src="">
		config.photos.retain(|p| !p.src.trim().is_empty());

		Ok(config)
	}

	/// The configured RSVP form link, or None if the operator hasn't set one
	/// up yet (in which case the page shows a placeholder, not a dead iframe)
	#[must_use]
	pub fn rsvp_form_url(&self) -> Option<&str> {
		non_blank(&self.rsvp_form_url)
	}

	/// Same deal as [`Self::rsvp_form_url`]: None means "coming soon"
	#[must_use]
	pub fn registry_url(&self) -> Option<&str> {
		non_blank(&self.registry_url)
	}

	#[must_use]
	pub fn venue_website(&self) -> Option<&str> {
		non_blank(&self.venue_website)
	}

	#[must_use]
	pub fn venue_packages_url(&self) -> Option<&str> {
		non_blank(&self.venue_packages_url)
	}

	/// The first photo gets top billing; the rest render uniformly
	#[must_use]
	pub fn featured_photo(&self) -> Option<&Photo> {
		self.photos.first()
	}

	#[must_use]
	pub fn other_photos(&self) -> &[Photo] {
		self.photos.get(1..).unwrap_or_default()
	}
}

fn non_blank(s: &str) -> Option<&str> {
	let s = s.trim();
	(!s.is_empty()).then_some(s)
}

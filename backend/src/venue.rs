use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{embed, WeddingConfig};

pub struct Venue<'c> {
	pub config: &'c WeddingConfig
}

impl RenderOnce for Venue<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let config = self.config;
		let search = embed::maps_search_url(&config.venue_name, &config.venue_address);
		let directions = embed::maps_directions_url(&config.venue_name, &config.venue_address);
		let map = embed::maps_embed_url(&config.venue_name, &config.venue_address);

		tmpl << html! {
			div(class = "card-grid") {
				div(class = "card") {
					h3 : &config.venue_name;
					div(class = "muted") : &config.venue_address;
					p {
						a(href = search, target = "_blank", rel = "noreferrer", class = "button forest") : "Open in Google Maps";
						: " ";
						a(href = directions, target = "_blank", rel = "noreferrer", class = "button plain") : "Get directions";
					}
					: LinkButton {
						href: config.venue_website().map(str::to_owned),
						label: "Venue site",
						class: "button plain"
					};
					: LinkButton {
						href: config.venue_packages_url().map(str::to_owned),
						label: "Wedding packages",
						class: "button"
					};
				}
				div(class = "card") {
					h3 : "Map preview";
					div(class = "fine") : "If embeds are blocked, the buttons on the left always work.";
					iframe(
						title = "Map",
						loading = "lazy",
						referrerpolicy = "no-referrer-when-downgrade",
						src = map
					) { }
				}
			}
		}
	}
}

// renders nothing at all when the config leaves the link out
struct LinkButton {
	href: Option<String>,
	label: &'static str,
	class: &'static str
}

impl RenderOnce for LinkButton {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { href, label, class } = self;
		if let Some(href) = href {
			tmpl << html! {
				p {
					a(href = href, target = "_blank", rel = "noreferrer", class = class) : label;
				}
			};
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_util::test_config;
	use horrorshow::Template;

	#[test]
	fn map_links_come_from_the_configured_venue() {
		let config = test_config();
		let html = Venue { config: &config }.into_string().unwrap();

		assert!(html.contains("https://www.google.com/maps/search/?api=1&amp;query=Maple+Hills+Farms"));
		assert!(html.contains("https://www.google.com/maps/dir/?api=1&amp;destination="));
		assert!(html.contains("output=embed"));
		assert!(html.contains("Venue site"));
		assert!(html.contains("Wedding packages"));
	}

	#[test]
	fn optional_venue_links_disappear_when_unset() {
		let mut config = test_config();
		config.venue_website = String::new();
		config.venue_packages_url = String::new();
		let html = Venue { config: &config }.into_string().unwrap();

		assert!(!html.contains("Venue site"));
		assert!(!html.contains("Wedding packages"));
	}
}

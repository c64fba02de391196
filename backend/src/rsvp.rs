use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{embed, month_day_year, WeddingConfig};

pub struct Rsvp<'c> {
	pub config: &'c WeddingConfig
}

impl RenderOnce for Rsvp<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let config = self.config;

		tmpl << html! {
			div(class = "card") {
				h3 : "RSVP";
				p(class = "muted") {
					: "Please RSVP by ";
					b : month_day_year(config.rsvp_by);
					: ".";
				}
				ul(class = "fine") {
					li : "Include the number of children in your RSVP.";
					li : "Dietary restrictions help us plan the buffet properly.";
					li : "Song requests are strongly encouraged.";
				}
				: FormEmbed(config.rsvp_form_url().map(str::to_owned));
			}
		}
	}
}

// The form host is an opaque URL to us; all we do is embed it (with the
// frameable-layout marker) or, if the operator hasn't set one up, say so
// instead of rendering a dead iframe.
struct FormEmbed(Option<String>);

impl RenderOnce for FormEmbed {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		match self.0 {
			Some(form_url) => tmpl << html! {
				iframe(
					title = "RSVP form",
					loading = "lazy",
					src = embed::form_embed_url(&form_url)
				) { }
				p(class = "fine") {
					: "If the embed doesn't load on your device, ";
					a(href = &form_url, target = "_blank", rel = "noreferrer") : "open the form directly";
					: ".";
				}
			},
			None => tmpl << html! {
				div(class = "placeholder") {
					b : "The RSVP form link hasn't been added yet";
					br;
					: "Paste your public form link into the rsvp_form_url field of the wedding config.";
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_util::test_config;
	use horrorshow::Template;

	const FORM_URL: &str = "https://forms.office.com/Pages/ResponsePage.aspx?id=abc123";

	#[test]
	fn missing_form_url_renders_the_placeholder() {
		let config = test_config();
		assert_eq!(config.rsvp_form_url(), None);

		let html = Rsvp { config: &config }.into_string().unwrap();

		assert!(html.contains("form link hasn"));
		assert!(!html.contains("<iframe"));
	}

	#[test]
	fn configured_form_gets_embedded_with_the_marker() {
		let mut config = test_config();
		config.rsvp_form_url = FORM_URL.into();

		let html = Rsvp { config: &config }.into_string().unwrap();

		assert!(html.contains("<iframe"));
		// embed marker appended exactly once (the & is html-escaped in the attr)
		assert!(html.contains("ResponsePage.aspx?id=abc123&amp;embed=true"));
		assert_eq!(html.matches("embed=true").count(), 1);
		// ...and the direct link still points at the raw configured URL
		assert!(html.contains("href=\"https://forms.office.com/Pages/ResponsePage.aspx?id=abc123\""));
	}

	#[test]
	fn deadline_sentence_uses_the_config_date() {
		let config = test_config();
		let html = Rsvp { config: &config }.into_string().unwrap();

		assert!(html.contains("May 31, 2026"));
	}
}

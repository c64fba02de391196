use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::WeddingConfig;

pub struct Travel<'c> {
	pub config: &'c WeddingConfig
}

impl RenderOnce for Travel<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let config = self.config;

		tmpl << html! {
			div(class = "card") {
				h3 : "Hotel suggestions";
				p(class = "muted") {
					: "Book early - summer weekends can fill up fast. The venue is an easy \
					drive from town, so staying in the city gives you lots of food and \
					coffee options.";
				}
			}
			@ if config.hotels.is_empty() {
				div(class = "placeholder") : "We're still putting together a hotel list - check back soon!";
			}
			div(class = "card-grid") {
				@ for tier in &config.hotels {
					div(class = "card") {
						h3 : &tier.tier;
						@ for hotel in &tier.items {
							a(href = &hotel.url, target = "_blank", rel = "noreferrer", class = "hotel") {
								b : &hotel.name;
								div(class = "area") : &hotel.area;
								div(class = "muted") : &hotel.notes;
							}
						}
					}
				}
			}
			div(class = "card") {
				h3 : "What to pack";
				p(class = "muted") {
					: "Outdoor + tent wedding. Bring comfy shoes, a light layer for the \
					evening, and your best dance bravery.";
				}
				span(class = "pill") : "Layer up";
				: " ";
				span(class = "pill") : "Comfortable footwear";
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_util::test_config;
	use horrorshow::Template;

	#[test]
	fn hotels_render_grouped_by_tier() {
		let config = test_config();
		let html = Travel { config: &config }.into_string().unwrap();

		assert!(html.contains("Budget-friendly"));
		assert!(html.contains("Closest-to-venue (Hanmer area)"));
		assert!(html.contains("href=\"https://example.com/super8\""));
		assert!(html.contains("Fleur De Lis Motel"));
	}

	#[test]
	fn empty_hotel_list_gets_a_placeholder() {
		let mut config = test_config();
		config.hotels.clear();
		let html = Travel { config: &config }.into_string().unwrap();

		assert!(html.contains("still putting together a hotel list"));
	}
}

use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::WeddingConfig;

pub struct Gallery<'c> {
	pub config: &'c WeddingConfig
}

impl RenderOnce for Gallery<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let config = self.config;

		// blank entries were filtered at config load, so first == featured
		let Some(featured) = config.featured_photo() else {
			tmpl << html! {
				div(class = "placeholder") : "Photos are on their way - check back soon!";
			};
			return;
		};

		tmpl << html! {
			div(class = "featured") {
				img(src = &featured.src, alt = &featured.caption, loading = "lazy");
				div(class = "caption") {
					span(class = "pill gold") : "Featured";
					br;
					b : &featured.caption;
				}
			}
			div(class = "thumbs") {
				@ for photo in config.other_photos() {
					div(class = "thumb") {
						img(src = &photo.src, alt = &photo.caption, loading = "lazy");
						div(class = "caption") : &photo.caption;
					}
				}
			}
		}
	}
}

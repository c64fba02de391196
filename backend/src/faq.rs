use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::WeddingConfig;

const ITEMS: &[(&str, &str)] = &[
	(
		"Dress code?",
		"Formal, outdoor-appropriate. Think suit or cocktail dress, plus shoes you can survive grass in."
	),
	(
		"Are phones and photos allowed?",
		"Absolutely - cell phones and pictures are welcome."
	),
	(
		"Rain plan?",
		"If the weather turns dramatic, the ceremony will move to a covered rustic gazebo with plenty of space."
	),
	(
		"Smoking / vaping?",
		"Designated smoking/vaping areas will be available on site."
	),
	(
		"Campfire?",
		"There'll be a rustic campfire area for mingling, and possibly marshmallows."
	),
	(
		"Pets?",
		"No pets, please (as much as we love them)."
	),
	(
		"Parking?",
		"Plenty of on-site parking."
	)
];

pub struct Faq<'c> {
	pub config: &'c WeddingConfig
}

impl RenderOnce for Faq<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			div(class = "card-grid") {
				@ for (question, answer) in ITEMS.iter().copied() {
					div(class = "card") {
						h3 : question;
						div(class = "muted") : answer;
					}
				}
				div(class = "card") {
					h3 : "Kid-friendly?";
					div(class = "muted") {
						@ if self.config.kids_welcome {
							: "Yes - kids are welcome.";
						} else {
							: "We love your little ones, but this will be an adults-only celebration.";
						}
					}
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

	#[test]
	fn kids_answer_follows_the_config_flag() {
		let mut config = test_config();
		let html = Faq { config: &config }.into_string().unwrap();
		assert!(html.contains("kids are welcome"));

		config.kids_welcome = false;
		let html = Faq { config: &config }.into_string().unwrap();
		assert!(html.contains("adults-only celebration"));
	}

	#[test]
	fn all_fixed_questions_show_up() {
		let config = test_config();
		let html = Faq { config: &config }.into_string().unwrap();

		for (question, _) in ITEMS {
			assert!(html.contains(question), "missing: {question}");
		}
	}
}

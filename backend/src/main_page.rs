use crate::{faq::Faq, gallery::Gallery, rsvp::Rsvp, travel::Travel, venue::Venue, AppState};
use axum::{extract::State, response::Html};
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::{long_date, month_day_year, Remaining, WeddingConfig};

build_info::build_info!(fn build);

const NAV_LINKS: &[(&str, &str)] = &[
	("details", "Details"),
	("schedule", "Schedule"),
	("venue", "Venue"),
	("gallery", "Photos"),
	("travel", "Travel"),
	("rsvp", "RSVP"),
	("faq", "FAQ"),
	("registry", "Registry")
];

// Keeps the digits live without reloading: poll the countdown endpoint once a
// second and stop the interval for good once the server says we've hit zero.
const COUNTDOWN_SCRIPT: &str = r#"
(() => {
	const pad = (n) => String(n).padStart(2, "0");
	const apply = (r) => {
		for (const k of ["days", "hours", "minutes", "seconds"]) {
			document.getElementById("cd-" + k).textContent = pad(r[k]);
		}
		if (r.is_complete) {
			document.getElementById("cd-heading").textContent = "It's wedding time!";
			clearInterval(timer);
		}
	};
	const tick = () => fetch("/api/countdown")
		.then((r) => r.json())
		.then(apply)
		.catch(() => {});
	const timer = setInterval(tick, 1000);
})();
"#;

pub async fn get_wedding_page(State(state): State<AppState>) -> Html<String> {
	let remaining = *state.countdown.borrow();

	Html(WeddingPage {
		config: &state.config,
		remaining
	}.into_string()
	.unwrap())
}

pub struct WeddingPage<'c> {
	pub config: &'c WeddingConfig,
	pub remaining: Remaining
}

impl RenderOnce for WeddingPage<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { config, remaining } = self;

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : &config.couple;
					style : Raw(crate::style::PAGE_STYLE);
				}
				body {
					: Nav { config };
					: Hero { config, remaining };
					: Section { id: "details", kicker: "All the important stuff", title: "The basics", content: DetailsGrid { config } };
					: Section { id: "schedule", kicker: "How the day flows", title: "Schedule", content: Schedule { config } };
					: Section { id: "venue", kicker: "Where to find us", title: "Venue", content: Venue { config } };
					: Section { id: "gallery", kicker: "A few favorite moments", title: "Photos", content: Gallery { config } };
					: Section { id: "travel", kicker: "Sleep, drive, repeat", title: "Travel", content: Travel { config } };
					: Section { id: "rsvp", kicker: "Let us know you're coming", title: "RSVP", content: Rsvp { config } };
					: Section { id: "faq", kicker: "Questions humans ask", title: "FAQ", content: Faq { config } };
					: Section { id: "registry", kicker: "Gifts and good vibes", title: "Registry", content: Registry { config } };
					: Footer { config };
					script : Raw(COUNTDOWN_SCRIPT);
				}
			}
		}
	}
}

struct Section<C: RenderOnce> {
	id: &'static str,
	kicker: &'static str,
	title: &'static str,
	content: C
}

impl<C: RenderOnce> RenderOnce for Section<C> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			section(id = self.id) {
				div(class = "kicker") : self.kicker;
				h2 : self.title;
				div(class = "rule") { }
				: self.content;
			}
		}
	}
}

struct Nav<'c> {
	config: &'c WeddingConfig
}

impl RenderOnce for Nav<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			div(id = "nav") {
				a(href = "#top") {
					b : &self.config.couple;
				}
				div(id = "nav-links") {
					@ for (id, label) in NAV_LINKS.iter().copied() {
						a(href = format_args!("#{id}")) : label;
					}
				}
				a(href = "#rsvp", class = "button") : "RSVP";
			}
		}
	}
}

struct Hero<'c> {
	config: &'c WeddingConfig,
	remaining: Remaining
}

impl RenderOnce for Hero<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { config, remaining } = self;

		tmpl << html! {
			header(
				id = "hero",
				style = format_args!("background-image: url('{}')", config.hero_image_url)
			) {
				span(class = "pill") : &config.venue_name;
				h1 : &config.couple;
				p(class = "subtitle") : "We're getting married! Nature is invited. Mosquitoes are not.";
				div(class = "where-and-when") {
					span : long_date(config.date);
					: " • Ceremony ";
					: &config.ceremony_time;
					: " • ";
					: &config.venue_address;
				}
				div(id = "countdown-card", class = "card") {
					div(class = "kicker") : "Countdown";
					h3(id = "cd-heading") {
						@ if remaining.is_complete {
							: "It's wedding time!";
						} else {
							: "See you soon";
						}
					}
					: CountdownDigits { remaining };
					div(class = "note-box") {
						b : "Quick notes";
						ul {
							li {
								: "Dinner at ";
								: &config.dinner_time;
							}
							@ if config.kids_welcome {
								li : "Kids welcome";
							} else {
								li : "Adults-only celebration";
							}
							@ if !config.parking.is_empty() {
								li : &config.parking;
							}
						}
					}
				}
			}
		}
	}
}

pub struct CountdownDigits {
	pub remaining: Remaining
}

impl RenderOnce for CountdownDigits {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let r = self.remaining;
		let digits = [
			("cd-days", "Days", r.days),
			("cd-hours", "Hours", r.hours),
			("cd-minutes", "Min", r.minutes),
			("cd-seconds", "Sec", r.seconds)
		];

		tmpl << html! {
			div(id = "countdown-digits") {
				@ for (id, label, value) in digits {
					div(class = "digit") {
						b(id = id) : format_args!("{value:02}");
						span : label;
					}
				}
			}
		}
	}
}

struct DetailsGrid<'c> {
	config: &'c WeddingConfig
}

impl RenderOnce for DetailsGrid<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let config = self.config;

		tmpl << html! {
			div(class = "card-grid") {
				div(class = "card") {
					h3 : "Date";
					div(class = "muted") : long_date(config.date);
				}
				div(class = "card") {
					h3 : "Ceremony";
					div(class = "muted") {
						: "Starts at ";
						: &config.ceremony_time;
					}
				}
				div(class = "card") {
					h3 : "Venue";
					div(class = "muted") : &config.venue_name;
					div(class = "fine") : &config.venue_address;
				}
				div(class = "card") {
					h3 : "Dinner";
					div(class = "muted") {
						: &config.dinner_time;
						: " • ";
						: &config.dinner_note;
					}
					div(class = "fine") : "Cocktails + reception to follow the ceremony";
				}
				div(class = "card") {
					h3 : "Kids";
					div(class = "muted") {
						@ if config.kids_welcome {
							: "Welcome";
						} else {
							: "Adults-only";
						}
					}
				}
				@ if !config.parking.is_empty() {
					div(class = "card") {
						h3 : "Parking";
						div(class = "muted") : &config.parking;
					}
				}
				div(class = "card") {
					h3 : "RSVP deadline";
					div(class = "muted") : month_day_year(config.rsvp_by);
				}
			}
		}
	}
}

struct Schedule<'c> {
	config: &'c WeddingConfig
}

impl RenderOnce for Schedule<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let config = self.config;

		tmpl << html! {
			div(class = "card-grid") {
				div(class = "card") {
					h3 : &config.ceremony_time;
					div(class = "muted") : "Ceremony";
					div(class = "fine") : "Outside the barn doors (weather-permitting)";
				}
				div(class = "card") {
					h3 : "After ceremony";
					div(class = "muted") : "Cocktails + Reception";
					div(class = "fine") : "Mingle, laugh, hydrate, repeat";
				}
				div(class = "card") {
					h3 : &config.dinner_time;
					div(class = "muted") : "Dinner";
					div(class = "fine") : &config.dinner_note;
				}
			}
		}
	}
}

pub struct Registry<'c> {
	pub config: &'c WeddingConfig
}

impl RenderOnce for Registry<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		match self.config.registry_url() {
			Some(url) => tmpl << html! {
				div(class = "card") {
					h3 : "Registry";
					p(class = "muted") : "Anything off the registry means the world to us.";
					a(href = url, target = "_blank", rel = "noreferrer", class = "button") : "View registry";
				}
			},
			None => tmpl << html! {
				div(class = "card") {
					h3 : "Registry";
					p(class = "muted") : "We'll post the link here once it's ready.";
					span(class = "pill gold") : "Coming soon";
				}
			}
		}
	}
}

struct Footer<'c> {
	config: &'c WeddingConfig
}

impl RenderOnce for Footer<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let build_info = build();
		let compiler = &build_info.compiler;

		tmpl << html! {
			footer {
				b : &self.config.couple;
				br;
				: "Maple syrup farm vibes • barn doors • big tent energy";
				br; br;
				: format!("This site was built at {} using rustc {} {}, with ", build_info.timestamp, compiler.channel, compiler.version);
				a(href = "https://github.com/tokio-rs/axum") : "axum";
				: ", ";
				a(href = "https://tokio.rs") : "tokio";
				: ", and ";
				a(href = "https://github.com/Stebalien/horrorshow-rs") : "horrorshow";
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::DateTime;

	use crate::test_util::test_config;

	fn render(config: &WeddingConfig, remaining: Remaining) -> String {
		WeddingPage { config, remaining }.into_string().unwrap()
	}

	#[test]
	fn every_section_makes_it_onto_the_page() {
		let config = test_config();
		let page = render(&config, Remaining::from_delta_seconds(90_061));

		for (id, _) in NAV_LINKS {
			assert!(page.contains(&format!("<section id=\"{id}\">")), "missing section {id}");
		}
		assert!(page.contains("Robert Phillips &amp; Natalie Kavanaugh"));
		assert!(page.contains("Sunday, August 23, 2026"));
	}

	#[test]
	fn countdown_digits_are_zero_padded() {
		let config = test_config();
		let page = render(&config, Remaining::from_delta_seconds(90_061));

		for id in ["cd-days", "cd-hours", "cd-minutes", "cd-seconds"] {
			assert!(page.contains(&format!("<b id=\"{id}\">01</b>")));
		}
		assert!(page.contains("See you soon"));
	}

	#[test]
	fn finished_countdown_reads_as_complete() {
		let config = test_config();
		let target = DateTime::parse_from_rfc3339("2026-08-23T15:00:00-04:00").unwrap();
		let now = target.with_timezone(&chrono::Utc);
		let page = render(&config, Remaining::between(target, now));

		assert!(page.contains("It&#x27;s wedding time!") || page.contains("It's wedding time!"));
		assert!(page.contains("<b id=\"cd-seconds\">00</b>"));
	}

	#[test]
	fn registry_degrades_to_coming_soon() {
		let mut config = test_config();
		config.registry_url = String::new();
		let page = render(&config, Remaining::from_delta_seconds(1));

		assert!(page.contains("Coming soon"));

		config.registry_url = "https://example.com/registry".into();
		let page = render(&config, Remaining::from_delta_seconds(1));

		assert!(page.contains("href=\"https://example.com/registry\""));
		assert!(!page.contains("Coming soon"));
	}
}

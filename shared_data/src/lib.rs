use chrono::{DateTime, FixedOffset};

mod config;
mod countdown;
pub mod embed;

pub use config::{ConfigError, Hotel, HotelTier, Photo, WeddingConfig};
pub use countdown::Remaining;

/// "Sunday, August 23, 2026", the hero/details style
#[must_use]
pub fn long_date(dt: DateTime<FixedOffset>) -> String {
	dt.format("%A, %B %-d, %Y").to_string()
}

/// "May 31, 2026", the inline "please rsvp by" style
#[must_use]
pub fn month_day_year(dt: DateTime<FixedOffset>) -> String {
	dt.format("%B %-d, %Y").to_string()
}

pub const BASE_STYLE: &str = r#"
* {
	--ink: #2a2018;
	--maple: #8b2f2f;
	--forest: #2f4a3a;
	--gold: #c8a25a;
	--cream: #fbfaf7;
	--card-border: rgba(0, 0, 0, 0.1);
	color: var(--ink);
	font-family: Georgia, "Times New Roman", serif;
	box-sizing: border-box;
}
body {
	background-color: var(--cream);
	margin: 0;
}
a {
	color: var(--maple);
	text-decoration-thickness: 2px;
}
::selection {
	background: rgba(200, 162, 90, 0.35);
}
.card {
	background-color: rgba(255, 255, 255, 0.75);
	border: 1px solid var(--card-border);
	border-radius: 24px;
	padding: 20px;
	box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
}
.pill {
	display: inline-flex;
	align-items: center;
	gap: 8px;
	border-radius: 999px;
	padding: 4px 12px;
	font-size: 14px;
	background-color: rgba(0, 0, 0, 0.05);
}
.pill.gold {
	background-color: rgba(200, 162, 90, 0.14);
	color: rgba(90, 62, 18, 0.95);
	border: 1px solid rgba(200, 162, 90, 0.22);
}
.pill.forest {
	background-color: rgba(47, 74, 58, 0.1);
	color: rgba(47, 74, 58, 0.95);
	border: 1px solid rgba(47, 74, 58, 0.18);
}
.button {
	display: inline-block;
	border-radius: 16px;
	padding: 8px 16px;
	font-size: 14px;
	font-weight: 600;
	text-decoration: none;
	color: var(--cream);
	background: linear-gradient(to right, rgba(139, 47, 47, 0.98), rgba(42, 32, 24, 0.98));
}
.button.forest {
	background: linear-gradient(to right, rgba(47, 74, 58, 0.98), rgba(42, 32, 24, 0.98));
}
.button.plain {
	background: white;
	color: var(--ink);
	border: 1px solid var(--card-border);
}
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dates_format_for_humans() {
		let date = DateTime::parse_from_rfc3339("2026-08-23T15:00:00-04:00").unwrap();

		assert_eq!(long_date(date), "Sunday, August 23, 2026");
		assert_eq!(month_day_year(date), "August 23, 2026");
	}
}

use chrono::{DateTime, FixedOffset, Utc};

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// How long is left until the wedding, broken up for display. Every field is
/// non-negative, and once the target has passed they're all pinned to zero.
#[derive(serde::Serialize, serde::Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Remaining {
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
	pub is_complete: bool
}

impl Remaining {
	#[must_use]
	pub fn between(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
		Self::from_delta_seconds((target.with_timezone(&Utc) - now).num_seconds())
	}

	#[must_use]
	pub fn from_delta_seconds(delta: i64) -> Self {
		let delta = delta.max(0);

		Self {
			days: delta / SECS_PER_DAY,
			hours: (delta % SECS_PER_DAY) / SECS_PER_HOUR,
			minutes: (delta % SECS_PER_HOUR) / SECS_PER_MINUTE,
			seconds: delta % SECS_PER_MINUTE,
			is_complete: delta == 0
		}
	}

	/// The all-zeroes, already-happened state
	#[must_use]
	pub fn complete() -> Self {
		Self::from_delta_seconds(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeDelta;

	fn target() -> DateTime<FixedOffset> {
		DateTime::parse_from_rfc3339("2026-08-23T15:00:00-04:00").unwrap()
	}

	#[test]
	fn counts_down_each_unit() {
		// 1 day, 1 hour, 1 minute, 1 second
		let now = (target() - TimeDelta::seconds(90_061)).with_timezone(&Utc);
		let remaining = Remaining::between(target(), now);

		assert_eq!(remaining, Remaining {
			days: 1,
			hours: 1,
			minutes: 1,
			seconds: 1,
			is_complete: false
		});
	}

	#[test]
	fn zeroes_out_at_the_target() {
		let at_target = Remaining::between(target(), target().with_timezone(&Utc));
		assert_eq!(at_target, Remaining::complete());
		assert!(at_target.is_complete);
	}

	#[test]
	fn clamps_after_the_target() {
		let now = (target() + TimeDelta::days(2)).with_timezone(&Utc);
		let after = Remaining::between(target(), now);

		assert_eq!(after, Remaining::complete());
	}

	#[test]
	fn never_negative_before_the_target() {
		for secs in [1, 59, 60, 3_599, 3_600, 86_399, 86_400, 123_456_789] {
			let remaining = Remaining::from_delta_seconds(secs);

			assert!(remaining.days >= 0);
			assert!((0..24).contains(&remaining.hours));
			assert!((0..60).contains(&remaining.minutes));
			assert!((0..60).contains(&remaining.seconds));
			assert!(!remaining.is_complete);

			// and the breakdown should reassemble into what we started with
			let total = remaining.days * 86_400
				+ remaining.hours * 3_600
				+ remaining.minutes * 60
				+ remaining.seconds;
			assert_eq!(total, secs);
		}
	}
}

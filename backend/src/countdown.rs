use crate::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, FixedOffset, Utc};
use shared_data::Remaining;
use std::time::Duration;
use tokio::{
	sync::watch,
	task::JoinHandle,
	time::{interval, MissedTickBehavior}
};

/// Owns the once-a-second recompute of the countdown. Whoever's rendering
/// just holds the watch receiver; the latest value is always in there.
///
/// Dropping the ticker aborts the task, so the refresh can't outlive the
/// thing that spawned it.
pub struct CountdownTicker {
	task: JoinHandle<()>
}

impl CountdownTicker {
	pub fn spawn(target: DateTime<FixedOffset>) -> (Self, watch::Receiver<Remaining>) {
		let (tx, rx) = watch::channel(Remaining::between(target, Utc::now()));

		let task = tokio::spawn(async move {
			let mut tick = interval(Duration::from_secs(1));
			// if we fall behind, just pick up at the current second
			tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

			loop {
				tick.tick().await;

				let remaining = Remaining::between(target, Utc::now());
				let done = remaining.is_complete;

				if tx.send(remaining).is_err() || done {
					// Past the target there's nothing left to recompute; the
					// channel keeps reporting all-zeroes from here on.
					break;
				}
			}
		});

		(Self { task }, rx)
	}
}

impl Drop for CountdownTicker {
	fn drop(&mut self) {
		self.task.abort();
	}
}

pub async fn get_countdown(State(state): State<AppState>) -> Json<Remaining> {
	Json(*state.countdown.borrow())
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeDelta;

	fn offset_now(delta: TimeDelta) -> DateTime<FixedOffset> {
		(Utc::now() + delta).fixed_offset()
	}

	#[tokio::test]
	async fn future_target_counts_down() {
		let (_ticker, rx) = CountdownTicker::spawn(offset_now(TimeDelta::hours(2)));

		let remaining = *rx.borrow();
		assert!(!remaining.is_complete);
		assert!(remaining.hours >= 1);
		assert_eq!(remaining.days, 0);
	}

	#[tokio::test]
	async fn past_target_settles_at_zero() {
		let (_ticker, mut rx) = CountdownTicker::spawn(offset_now(TimeDelta::hours(-1)));

		// the initial value is already complete, and the first tick re-sends
		// the final state before the task exits
		assert_eq!(*rx.borrow(), Remaining::complete());

		rx.changed().await.unwrap();
		assert_eq!(*rx.borrow(), Remaining::complete());
	}

	#[tokio::test]
	async fn dropping_the_ticker_cancels_the_task() {
		let (ticker, rx) = CountdownTicker::spawn(offset_now(TimeDelta::days(30)));

		let task = ticker.task.abort_handle();
		drop(ticker);

		// give the runtime a few beats to process the abort
		for _ in 0..10 {
			if task.is_finished() {
				break;
			}
			tokio::task::yield_now().await;
		}
		assert!(task.is_finished());

		// the receiver still hands out the last published value
		assert!(!rx.borrow().is_complete);
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::count_up::CountUp;

/// Something that runs a callback once before the next paint, passing a
/// monotonically increasing timestamp in milliseconds.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

/// `window.requestAnimationFrame`.
#[derive(Clone, Copy, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let Some(window) = window() else {
            log::warn!("No window to schedule animation frames on");
            return;
        };
        // once_into_js frees the closure after it has been called
        let frame = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if window.request_animation_frame(frame.unchecked_ref()).is_err() {
            log::warn!("requestAnimationFrame rejected the callback");
        }
    }
}

/// Drives `count` one frame at a time until it reports done, handing every
/// displayed value to `on_value`.
///
/// A cancelled `count` ends the loop at its next frame without calling
/// `on_value` again.
pub fn run_count_up<S>(scheduler: Rc<S>, count: Rc<RefCell<CountUp>>, on_value: Rc<dyn Fn(u64)>)
where
    S: FrameScheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |timestamp| {
        if count.borrow().is_cancelled() {
            return;
        }
        let step = count.borrow_mut().advance(timestamp);
        on_value(step.value);
        if !step.done {
            run_count_up(next, count, on_value);
        }
    }));
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Holds requested frames until the test fires them.
    #[derive(Default)]
    pub struct ManualFrames {
        pending: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Runs every frame queued so far with the given timestamp.
        pub fn fire(&self, timestamp: f64) {
            let due = std::mem::take(&mut *self.pending.borrow_mut());
            for callback in due {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
            self.pending.borrow_mut().push(callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualFrames;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u64>>>, Rc<dyn Fn(u64)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn loop_stops_once_target_is_reached() {
        let frames = Rc::new(ManualFrames::default());
        let count = Rc::new(RefCell::new(CountUp::new(300, 2000).unwrap()));
        assert!(count.borrow_mut().observe(1.0));
        let (seen, on_value) = recorder();

        run_count_up(frames.clone(), count.clone(), on_value);

        let mut ts = 1000.0;
        while frames.pending() > 0 {
            frames.fire(ts);
            ts += 250.0;
        }

        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&300));
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        // origin 1000, last frame at 3000
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn one_frame_in_flight_at_a_time() {
        let frames = Rc::new(ManualFrames::default());
        let count = Rc::new(RefCell::new(CountUp::new(10, 100).unwrap()));
        count.borrow_mut().observe(1.0);
        let (_, on_value) = recorder();

        run_count_up(frames.clone(), count, on_value);
        assert_eq!(frames.pending(), 1);
        frames.fire(0.0);
        assert_eq!(frames.pending(), 1);
        frames.fire(100.0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn cancelled_frame_lapses_harmlessly() {
        let frames = Rc::new(ManualFrames::default());
        let count = Rc::new(RefCell::new(CountUp::new(250, 2000).unwrap()));
        count.borrow_mut().observe(1.0);
        let (seen, on_value) = recorder();

        run_count_up(frames.clone(), count.clone(), on_value);
        frames.fire(0.0);
        count.borrow_mut().cancel();
        frames.fire(500.0);

        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(count.borrow().current(), 0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn irregular_frame_gaps_reach_exact_target() {
        let gaps = [16.7, 3.0, 41.2, 0.0, 120.5, 8.3, 250.0, 16.6];
        for target in [1u64, 15, 250, 999_999, u64::MAX / 2] {
            let frames = Rc::new(ManualFrames::default());
            let count = Rc::new(RefCell::new(CountUp::new(target, 1000).unwrap()));
            assert!(count.borrow_mut().observe(0.75));

            let shown = Rc::new(RefCell::new(Vec::new()));
            let on_value: Rc<dyn Fn(u64)> = {
                let count = count.clone();
                let shown = shown.clone();
                Rc::new(move |_| shown.borrow_mut().push(count.borrow().display("")))
            };
            run_count_up(frames.clone(), count.clone(), on_value);

            let mut ts = 5_000.0;
            let mut frame = 0;
            while frames.pending() > 0 {
                frames.fire(ts);
                ts += gaps[frame % gaps.len()];
                frame += 1;
            }

            let values: Vec<u64> = shown.borrow().iter().map(|text| text.parse().unwrap()).collect();
            assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "target {target}: {values:?}");
            assert_eq!(values.last(), Some(&target));
            assert_eq!(count.borrow().display("+"), format!("{target}+"));
        }
    }
}

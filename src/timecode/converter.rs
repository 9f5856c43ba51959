use crate::script::Selection;
use crate::timecode::{FrameRate, Timecode};

/// Convert a frame number to a `HH:MM:SS.mmm` string at the given rate
pub fn frame_to_timecode(frame: u64, fps: FrameRate) -> String {
    Timecode::from_frame(frame, fps).to_string()
}

/// Duration of a selection as a timecode plus its frame count
///
/// The frame count is converted as if it were a frame index, which gives the
/// elapsed time of `count` frames.
pub fn selection_duration(selection: &Selection, fps: FrameRate) -> (String, u64) {
    let frame_count = selection.end_frame() - selection.start_frame() + 1;
    (frame_to_timecode(frame_count, fps), frame_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fps(value: f64) -> FrameRate {
        FrameRate::new(value).unwrap()
    }

    #[test]
    fn test_frame_zero() {
        for rate in [1.0, 23.976, 24.0, 25.0, 29.97, 59.94, 120.0] {
            assert_eq!(frame_to_timecode(0, fps(rate)), "00:00:00.000");
        }
    }

    #[test]
    fn test_whole_rate() {
        assert_eq!(frame_to_timecode(24, fps(24.0)), "00:00:01.000");
        assert_eq!(frame_to_timecode(12, fps(24.0)), "00:00:00.500");
        assert_eq!(frame_to_timecode(24 * 3600, fps(24.0)), "01:00:00.000");
    }

    #[test]
    fn test_ntsc_film_rate() {
        let rate = fps(23.976);
        assert_eq!(frame_to_timecode(446, rate), "00:00:18.601");
        assert_eq!(frame_to_timecode(889, rate), "00:00:37.078");
        assert_eq!(frame_to_timecode(1397, rate), "00:00:58.266");
        assert_eq!(frame_to_timecode(1590, rate), "00:01:06.316");
    }

    #[test]
    fn test_selection_duration() {
        let rate = fps(23.976);
        let selection = Selection::new(446, 444).unwrap();
        assert_eq!(selection_duration(&selection, rate), ("00:00:18.518".to_string(), 444));

        let single = Selection::new(10, 1).unwrap();
        assert_eq!(selection_duration(&single, fps(25.0)), ("00:00:00.040".to_string(), 1));
    }

    proptest! {
        #[test]
        fn prop_duration_matches_range(
            start in 0u64..5_000_000,
            length in 1u64..500_000,
            rate in 1.0f64..240.0,
        ) {
            let rate = fps(rate);
            let selection = Selection::new(start, length).unwrap();
            let start_ms = Timecode::from_frame(selection.start_frame(), rate).as_millis() as f64;
            let end_ms = Timecode::from_frame(selection.end_frame(), rate).as_millis() as f64;
            let length_ms = Timecode::from_frame(length, rate).as_millis() as f64;

            // end_tc marks the start of the last frame, so one frame is missing
            let elapsed = end_ms - start_ms + rate.frame_duration() * 1000.0;
            prop_assert!((length_ms - elapsed).abs() <= 2.0);
        }

        #[test]
        fn prop_output_shape(frame in 0u64..8_000_000, rate in 24.0f64..240.0) {
            let tc = frame_to_timecode(frame, fps(rate));
            let bytes = tc.as_bytes();
            prop_assert_eq!(bytes.len(), 12);
            prop_assert_eq!(bytes[2], b':');
            prop_assert_eq!(bytes[5], b':');
            prop_assert_eq!(bytes[8], b'.');
        }
    }
}

//! Fixed-width field helpers
//!
//! Widths are counted in characters. Oversized input is truncated and a
//! warning is logged; these helpers never fail on long input.

use crate::{Error, Result};

/// A value fitted to a fixed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted {
    pub value: String,
    /// Whether characters were dropped to fit.
    pub truncated: bool,
}

/// A string of exactly `n` spaces.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `n` is negative.
pub fn spaces(n: isize) -> Result<String> {
    let count = usize::try_from(n)
        .map_err(|_| Error::InvalidArgument(format!("space count must not be negative: {n}")))?;
    Ok(" ".repeat(count))
}

/// Fit `input` to `width`, keeping the leading characters and padding on the right.
pub fn fit_right<'a>(input: impl Into<Option<&'a str>>, width: usize) -> Fitted {
    let input = input.into().unwrap_or_default();
    let len = input.chars().count();
    if len > width {
        return Fitted {
            value: input.chars().take(width).collect(),
            truncated: true,
        };
    }
    let mut value = String::with_capacity(width);
    value.push_str(input);
    value.extend(std::iter::repeat_n(' ', width - len));
    Fitted {
        value,
        truncated: false,
    }
}

/// Fit `input` to `width`, keeping the trailing characters and padding on the left.
pub fn fit_left<'a>(input: impl Into<Option<&'a str>>, width: usize) -> Fitted {
    let input = input.into().unwrap_or_default();
    let len = input.chars().count();
    if len > width {
        return Fitted {
            value: input.chars().skip(len - width).collect(),
            truncated: true,
        };
    }
    let mut value = String::with_capacity(width);
    value.extend(std::iter::repeat_n(' ', width - len));
    value.push_str(input);
    Fitted {
        value,
        truncated: false,
    }
}

/// Pad `input` with trailing spaces to exactly `width` characters.
///
/// `None` yields `width` spaces. Longer input keeps its first `width`
/// characters and logs a truncation warning.
pub fn pad_right<'a>(input: impl Into<Option<&'a str>>, width: usize) -> String {
    let input = input.into();
    let fitted = fit_right(input, width);
    if fitted.truncated {
        tracing::warn!(
            input = input.unwrap_or_default(),
            width,
            result = %fitted.value,
            "value truncated to fit fixed-width field"
        );
    }
    fitted.value
}

/// Pad `input` with leading spaces to exactly `width` characters.
///
/// Longer input keeps its last `width` characters and logs a truncation
/// warning.
pub fn pad_left<'a>(input: impl Into<Option<&'a str>>, width: usize) -> String {
    let input = input.into();
    let fitted = fit_left(input, width);
    if fitted.truncated {
        tracing::warn!(
            input = input.unwrap_or_default(),
            width,
            result = %fitted.value,
            "value truncated to fit fixed-width field"
        );
    }
    fitted.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn warnings(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .filter(|line| line.contains("WARN"))
                .map(str::to_string)
                .collect()
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs)
    }

    #[test]
    fn test_spaces() {
        assert_eq!(spaces(0).unwrap(), "");
        assert_eq!(spaces(10).unwrap(), "          ");
        for n in 0..32 {
            assert_eq!(spaces(n).unwrap().len(), n.unsigned_abs());
        }
    }

    #[test]
    fn test_spaces_negative() {
        for n in [-1, -10, isize::MIN] {
            let err = spaces(n).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_pad_right_shorter() {
        let padded = pad_right("FASTCHKN", 15);
        assert_eq!(padded, "FASTCHKN       ");
        assert_eq!(padded.len(), 15);
        assert!(padded.starts_with("FASTCHKN"));
    }

    #[test]
    fn test_pad_right_none_is_spaces() {
        assert_eq!(pad_right(None, 10), "          ");
    }

    #[test]
    fn test_pad_right_exact_width() {
        assert_eq!(pad_right("ABCDE", 5), "ABCDE");
        assert!(!fit_right("ABCDE", 5).truncated);
    }

    #[test]
    fn test_fit_right_truncates_head() {
        let fitted = fit_right("ABCDEFGHIJKLMNOPQRST", 15);
        assert_eq!(fitted.value, "ABCDEFGHIJKLMNO");
        assert!(fitted.truncated);
        assert_eq!(pad_right("ABCDEFGHIJKLMNOPQRST", 15), "ABCDEFGHIJKLMNO");
    }

    #[test]
    fn test_fit_left_truncates_tail() {
        let fitted = fit_left("ABCDEFGHIJ", 4);
        assert_eq!(fitted.value, "GHIJ");
        assert!(fitted.truncated);
        assert_eq!(pad_left("ABCDEFGHIJ", 4), "GHIJ");
    }

    #[test]
    fn test_pad_left_shorter() {
        let padded = pad_left("42", 5);
        assert_eq!(padded, "   42");
        assert!(padded.ends_with("42"));
        assert_eq!(pad_left(None, 3), "   ");
    }

    #[test]
    fn test_widths_count_characters() {
        assert_eq!(pad_right("Zoë", 5), "Zoë  ");
        assert_eq!(fit_right("Zoëlla", 3).value, "Zoë");
        assert_eq!(fit_left("Zoëlla", 4).value, "ëlla");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(pad_right("abc", 0), "");
        assert_eq!(pad_left("", 0), "");
    }

    #[test]
    fn test_truncation_logs_one_warning_each() {
        let (values, logs) = capture_logs(|| {
            vec![
                pad_right("ABCDEFGHIJKLMNOPQRST", 15),
                pad_left("ABCDEFGHIJ", 4),
            ]
        });
        assert_eq!(values, ["ABCDEFGHIJKLMNO", "GHIJ"]);
        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 2, "{warnings:?}");
        assert!(warnings.iter().all(|w| w.contains("value truncated to fit fixed-width field")));
        assert!(warnings[0].contains("width=15"));
        assert!(warnings[1].contains("width=4"));
    }

    #[test]
    fn test_fitting_input_logs_nothing() {
        let (_, logs) = capture_logs(|| {
            pad_right("FASTCHKN", 15);
            pad_left("42", 5);
            pad_right(None, 10);
            fit_right("ABCDEFGHIJ", 4);
        });
        assert!(logs.warnings().is_empty());
    }
}

//! Log sinks used to surface generated content.

/// Receives human-readable output from the generator.
///
/// The generator never prints on its own; callers decide where messages go
/// (a terminal, a tracing subscriber, or a buffer in tests).
pub trait LogSink {
    fn log(&mut self, message: &str);
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&mut self, _message: &str) {}
}

impl LogSink for Vec<String> {
    fn log(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_messages() {
        let mut sink: Vec<String> = Vec::new();
        sink.log("first");
        sink.log("second");
        assert_eq!(sink, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        fn emit(mut sink: impl LogSink) {
            sink.log("hello");
        }

        let mut sink: Vec<String> = Vec::new();
        emit(&mut sink);
        assert_eq!(sink, vec!["hello".to_string()]);
    }
}

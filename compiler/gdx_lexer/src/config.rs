//! Scanner configuration.

/// Where the scanner considers the input to end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EndOfInput {
    /// Every character of the source is scanned.
    #[default]
    Buffer,
    /// The final character of the source is treated as a terminator and is
    /// never scanned.
    ///
    /// Matches the behaviour of earlier gdx releases, where a script's last
    /// character was silently dropped. Handy for line-oriented input whose
    /// final character is always the trailing newline.
    TrailingSentinel,
}

impl EndOfInput {
    /// The part of `source` the scanner will actually look at.
    pub fn scannable(self, source: &str) -> &str {
        match self {
            EndOfInput::Buffer => source,
            EndOfInput::TrailingSentinel => match source.char_indices().next_back() {
                Some((last, _)) => &source[..last],
                None => source,
            },
        }
    }
}

/// Options for a single scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    pub end_of_input: EndOfInput,
}

impl ScanConfig {
    /// Configuration reproducing the historical end-of-input behaviour.
    pub fn legacy() -> Self {
        ScanConfig {
            end_of_input: EndOfInput::TrailingSentinel,
        }
    }
}

use std::fmt;

/// Display time used when a caller or a signal does not specify one.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Info,
        ToastKind::Success,
        ToastKind::Warning,
        ToastKind::Error,
    ];

    /// Parses a kind token; anything unrecognised is presented as `Info`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    /// Wire token, as carried by the `X-Toast-Type` header.
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    pub fn presentation(self) -> ToastPresentation {
        match self {
            ToastKind::Info => ToastPresentation {
                label: "Info",
                icon: 'i',
                accent: Accent::Blue,
            },
            ToastKind::Success => ToastPresentation {
                label: "Success",
                icon: '✓',
                accent: Accent::Green,
            },
            ToastKind::Warning => ToastPresentation {
                label: "Warning",
                icon: '!',
                accent: Accent::Yellow,
            },
            ToastKind::Error => ToastPresentation {
                label: "Error",
                icon: '✗',
                accent: Accent::Red,
            },
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Green,
    Yellow,
    Red,
}

/// How a toast of a given kind is styled by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastPresentation {
    pub label: &'static str,
    pub icon: char,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Builds a toast from raw signal values (response headers or page meta
    /// tags). Missing or unknown kinds become `Info`; missing or malformed
    /// durations become [`DEFAULT_TOAST_DURATION_MS`].
    pub fn from_signal(message: &str, kind: Option<&str>, duration: Option<&str>) -> Self {
        Self {
            message: message.to_string(),
            kind: kind.map(ToastKind::parse_lenient).unwrap_or_default(),
            duration_ms: parse_duration_ms(duration),
        }
    }
}

/// Integer-prefix parsing: leading digits after trimming are taken, the rest
/// of the value is ignored. No digits, zero, or overflow fall back to the
/// default duration.
pub fn parse_duration_ms(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_TOAST_DURATION_MS;
    };
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match trimmed[..digits_end].parse::<u64>() {
        Ok(0) | Err(_) => DEFAULT_TOAST_DURATION_MS,
        Ok(ms) => ms,
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRADIENTS: [&str; 8] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
    "linear-gradient(135deg, #d299c2 0%, #fef9d7 100%)",
    "linear-gradient(135deg, #89f7fe 0%, #66a6ff 100%)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Gradient,
    Image,
}

/// `value` is a CSS gradient or an image URL (data URLs included). Nothing
/// checks that it agrees with `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundSettings {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub value: String,
}

impl BackgroundSettings {
    pub fn gradient(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            value: value.into(),
        }
    }

    pub fn image(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Image,
            value: value.into(),
        }
    }
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self::gradient(DEFAULT_GRADIENTS[0])
    }
}

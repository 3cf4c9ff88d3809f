use serde::{Deserialize, Serialize};

/// Tile colors offered by the link editor. Serialized as the gradient class
/// pair so stored lists stay readable by the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkColor {
    #[default]
    #[serde(rename = "from-green-500 to-green-600")]
    Green,
    #[serde(rename = "from-orange-500 to-orange-600")]
    Orange,
    #[serde(rename = "from-blue-500 to-blue-600")]
    Blue,
    #[serde(rename = "from-purple-500 to-purple-600")]
    Purple,
    #[serde(rename = "from-pink-500 to-pink-600")]
    Pink,
    #[serde(rename = "from-red-500 to-red-600")]
    Red,
    #[serde(rename = "from-teal-500 to-teal-600")]
    Teal,
    #[serde(rename = "from-indigo-500 to-indigo-600")]
    Indigo,
}

impl LinkColor {
    pub const ALL: [LinkColor; 8] = [
        LinkColor::Green,
        LinkColor::Orange,
        LinkColor::Blue,
        LinkColor::Purple,
        LinkColor::Pink,
        LinkColor::Red,
        LinkColor::Teal,
        LinkColor::Indigo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkColor::Green => "Green",
            LinkColor::Orange => "Orange",
            LinkColor::Blue => "Blue",
            LinkColor::Purple => "Purple",
            LinkColor::Pink => "Pink",
            LinkColor::Red => "Red",
            LinkColor::Teal => "Teal",
            LinkColor::Indigo => "Indigo",
        }
    }

    pub fn gradient_class(self) -> &'static str {
        match self {
            LinkColor::Green => "from-green-500 to-green-600",
            LinkColor::Orange => "from-orange-500 to-orange-600",
            LinkColor::Blue => "from-blue-500 to-blue-600",
            LinkColor::Purple => "from-purple-500 to-purple-600",
            LinkColor::Pink => "from-pink-500 to-pink-600",
            LinkColor::Red => "from-red-500 to-red-600",
            LinkColor::Teal => "from-teal-500 to-teal-600",
            LinkColor::Indigo => "from-indigo-500 to-indigo-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn serializes_as_gradient_class() {
        for color in LinkColor::ALL {
            let encoded = serde_json::to_value(color).unwrap();
            assert_eq!(encoded, serde_json::json!(color.gradient_class()));
        }
    }

    #[test]
    fn labels_are_distinct() {
        let labels: HashSet<_> = LinkColor::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), LinkColor::ALL.len());
        assert_eq!(LinkColor::default().label(), "Green");
    }

    #[test]
    fn rejects_unknown_class() {
        let res = serde_json::from_str::<LinkColor>("\"from-black to-white\"");
        assert!(res.is_err());
    }
}

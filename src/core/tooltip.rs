use serde::{Deserialize, Serialize};

/// Default digit count from which tooltip values switch to abbreviated units.
pub const DEFAULT_LARGE_VALUE_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
}

impl TooltipItem {
    #[must_use]
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

/// Annotation content attached to a point that carries an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipInfo {
    pub category: TooltipItem,
    pub value: TooltipItem,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Per-sample inputs of [`assemble_tooltip`].
#[derive(Debug, Clone, Copy)]
pub struct TooltipInput<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category_name: &'a str,
    pub category_text: &'a str,
    pub value_name: &'a str,
    pub value: f64,
}

/// Builds the tooltip for one sample.
///
/// Returns `None` unless the sample has a non-empty title or description;
/// renderers rely on that absence to hide the event marker.
#[must_use]
pub fn assemble_tooltip(input: TooltipInput<'_>, large_value_digits: usize) -> Option<TooltipInfo> {
    let title = input.title.filter(|text| !text.is_empty());
    let description = input.description.filter(|text| !text.is_empty());
    if title.is_none() && description.is_none() {
        return None;
    }

    Some(TooltipInfo {
        category: TooltipItem::new(input.category_name, input.category_text),
        value: TooltipItem::new(
            input.value_name,
            format_tooltip_value(input.value, large_value_digits),
        ),
        title: title.map(str::to_owned),
        description: description.map(str::to_owned),
    })
}

/// Plain text for short values, unit-abbreviated text once the plain form
/// reaches `large_value_digits` characters.
///
/// Values below one thousand have no unit and always keep their plain text.
#[must_use]
pub fn format_tooltip_value(value: f64, large_value_digits: usize) -> String {
    let plain = value.to_string();
    if plain.len() < large_value_digits || !value.is_finite() {
        return plain;
    }
    match DisplayUnit::for_magnitude(value.abs()) {
        DisplayUnit::None => plain,
        unit => format!("{:.0}{}", (value / unit.scale()).round(), unit.suffix()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DisplayUnit {
    None,
    Thousands,
    Millions,
    Billions,
    Trillions,
}

impl DisplayUnit {
    fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= 1e12 {
            Self::Trillions
        } else if magnitude >= 1e9 {
            Self::Billions
        } else if magnitude >= 1e6 {
            Self::Millions
        } else if magnitude >= 1e3 {
            Self::Thousands
        } else {
            Self::None
        }
    }

    fn scale(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Thousands => 1e3,
            Self::Millions => 1e6,
            Self::Billions => 1e9,
            Self::Trillions => 1e12,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Thousands => "K",
            Self::Millions => "M",
            Self::Billions => "bn",
            Self::Trillions => "T",
        }
    }
}

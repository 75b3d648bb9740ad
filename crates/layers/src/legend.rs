/// Corner of the rendering surface a legend docks to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LegendAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Declarative legend descriptor. Keyed by the display name of the
/// active variable, not its canonical id, so the legend reads the way
/// the user wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub title: String,
    pub anchor: LegendAnchor,
}

impl Legend {
    pub fn for_variable(display_name: &str) -> Self {
        Self {
            title: display_name.to_string(),
            anchor: LegendAnchor::BottomRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Legend, LegendAnchor};

    #[test]
    fn legend_keeps_the_display_name() {
        let legend = Legend::for_variable("Sea Surface Temperature");
        assert_eq!(legend.title, "Sea Surface Temperature");
        assert_eq!(legend.anchor, LegendAnchor::BottomRight);
    }
}

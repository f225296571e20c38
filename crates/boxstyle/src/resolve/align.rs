//! Alignment lookup tables.

use super::keyword::keyword_enum;

keyword_enum! {
    /// `align-items` values.
    Align {
        Baseline = "baseline" => "baseline",
        Center = "center" => "center",
        End = "end" => "flex-end",
        Start = "start" => "flex-start",
        Stretch = "stretch" => "stretch",
    }
}

keyword_enum! {
    /// `align-content` values.
    AlignContent {
        Around = "around" => "space-around",
        Between = "between" => "space-between",
        Center = "center" => "center",
        Stretch = "stretch" => "stretch",
        End = "end" => "flex-end",
        Start = "start" => "flex-start",
    }
}

keyword_enum! {
    /// `align-self` and `justify-self` values.
    AlignSelf {
        Center = "center" => "center",
        End = "end" => "flex-end",
        Start = "start" => "flex-start",
        Stretch = "stretch" => "stretch",
    }
}

keyword_enum! {
    /// `justify-content` values.
    Justify {
        Center = "center" => "center",
        End = "end" => "flex-end",
        Start = "start" => "flex-start",
        Around = "around" => "space-around",
        Evenly = "evenly" => "space-evenly",
        Between = "between" => "space-between",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_table() {
        assert_eq!(Align::from("end").as_css(), "flex-end");
        assert_eq!(Align::from("baseline").as_css(), "baseline");
        assert_eq!(Align::from("stretch"), Align::Stretch);
    }

    #[test]
    fn test_align_content_spaces() {
        assert_eq!(AlignContent::from("around").as_css(), "space-around");
        assert_eq!(AlignContent::from("between").as_css(), "space-between");
    }

    #[test]
    fn test_justify_table() {
        assert_eq!(Justify::from("evenly").as_css(), "space-evenly");
        assert_eq!(Justify::from("start").as_css(), "flex-start");
    }

    #[test]
    fn test_unknown_is_custom() {
        let align = Align::from("last baseline");
        assert_eq!(align, Align::Custom("last baseline".to_string()));
        assert_eq!(align.as_css(), "last baseline");
    }

    #[test]
    fn test_names() {
        assert_eq!(AlignSelf::NAMES, &["center", "end", "start", "stretch"]);
    }

    #[test]
    fn test_deserialize() {
        let justify: Justify = serde_json::from_str(r#""between""#).unwrap();
        assert_eq!(justify, Justify::Between);
    }
}

//! Android vector drawables: resource naming and fill retinting.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

pub const THEME_FILL_COLOR: &str = "?attr/colorControlNormal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawableConfig {
    /// Written into every `android:fillColor` of a converted drawable.
    pub fill_color: String,
}

impl Default for DrawableConfig {
    fn default() -> Self {
	DrawableConfig {
	    fill_color: String::from(THEME_FILL_COLOR),
	}
    }
}

fn fill_color_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"android:fillColor="([^"]*)""#).expect("valid fillColor pattern"))
}

pub fn resource_name(icon: &str) -> String {
    format!("ic_{}", icon.replace('-', "_"))
}

pub fn resource_file_name(icon: &str) -> String {
    format!("{}.xml", resource_name(icon))
}

/// Replaces the value of every `android:fillColor` attribute with `color`.
pub fn retint<'t>(xml: &'t str, color: &str) -> Cow<'t, str> {
    let attribute = format!("android:fillColor=\"{}\"", color);
    fill_color_attribute().replace_all(xml, NoExpand(&attribute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("home", "ic_home")]
    #[case::hyphenated("arrow-left-circle", "ic_arrow_left_circle")]
    fn names_resources(#[case] icon: &str, #[case] expected: &str) {
	assert_eq!(resource_name(icon), expected);
	assert_eq!(resource_file_name(icon), format!("{}.xml", expected));
    }

    #[test]
    fn retints_every_fill() {
	let xml = r##"<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="24dp"
    android:height="24dp"
    android:viewportWidth="24"
    android:viewportHeight="24">
    <path
        android:fillColor="#FF000000"
        android:pathData="M12,2L2,22h20z"/>
    <path
        android:fillColor="@color/accent"
        android:strokeColor="#FF00FF00"
        android:pathData="M0,0h4v4z"/>
</vector>"##;

	let retinted = retint(xml, THEME_FILL_COLOR);

	assert_eq!(retinted.matches(r#"android:fillColor="?attr/colorControlNormal""#).count(), 2);
	assert!(!retinted.contains("#FF000000"));
	assert!(retinted.contains(r##"android:strokeColor="#FF00FF00""##));
    }

    #[test]
    fn color_is_inserted_literally() {
	let retinted = retint(r##"<path android:fillColor="#000"/>"##, "$1");

	assert_eq!(retinted, r#"<path android:fillColor="$1"/>"#);
    }

    #[test]
    fn untouched_without_fill() {
	let xml = r#"<vector><path android:pathData="M0,0"/></vector>"#;

	assert!(matches!(retint(xml, THEME_FILL_COLOR), Cow::Borrowed(_)));
    }
}

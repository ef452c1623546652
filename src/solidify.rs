use std::sync::OnceLock;

use regex::{Captures, Regex};

fn svg_wrapper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<svg[^>]*>(.*)</svg>").expect("valid svg pattern"))
}

fn group_wrapper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<g[^>]*>(.*)</g>").expect("valid group pattern"))
}

fn shape_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
	Regex::new(r"<(path|circle|line|rect|ellipse|polygon|polyline)([^>]*)>").expect("valid shape pattern")
    })
}

fn stroke_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
	Regex::new(r#"(stroke|stroke-width|stroke-linecap|stroke-linejoin)="[^"]*""#)
	    .expect("valid stroke pattern")
    })
}

fn with_black_fill(attributes: &str) -> String {
    match attributes.trim_end().strip_suffix('/') {
	Some(body) => format!("{} fill=\"black\" /", body.trim_end()),
	None => format!("{} fill=\"black\"", attributes),
    }
}

fn solidify_shape(caps: &Captures) -> String {
    let name = &caps[1];
    let mut attributes = stroke_attribute().replace_all(&caps[2], "").into_owned();

    if !attributes.contains("fill=\"") || attributes.contains("fill=\"none\"") {
	attributes = with_black_fill(&attributes.replace("fill=\"none\"", ""));
    }

    format!("<{}{}>", name, attributes)
}

///Unwraps the drawable content of an icon document and turns every
///outline into a filled shape: strokes are dropped and shapes without a
///fill are painted black.
pub fn solid_elements(svg: &str) -> String {
    let content = svg_wrapper().replace(svg, "$1");
    let content = group_wrapper().replace_all(&content, "$1");

    shape_tag().replace_all(&content, solidify_shape).into_owned()
}
